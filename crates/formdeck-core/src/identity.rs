//! Session identity resolution and the admin capability.
//!
//! The identity is resolved once per session from the host context, with a
//! debug override for headless testing, and is immutable afterwards. Admin
//! status is a plain string-equality check against the configured
//! administrator identity; the backend remains the real authorization
//! boundary for writes.

use serde::{Deserialize, Serialize};

/// The caller's opaque session identity.
///
/// Used only for request attribution and the equality-based admin check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Resolves the session identity.
    ///
    /// The host-supplied value wins; when absent, the debug override (the
    /// headless-testing escape hatch) is used; when both are absent the
    /// identity is empty and viewer/document operations will refuse to run.
    #[must_use]
    pub fn resolve(host: Option<&str>, debug_override: Option<&str>) -> Self {
        let value = host
            .filter(|v| !v.is_empty())
            .or(debug_override.filter(|v| !v.is_empty()))
            .unwrap_or_default();
        Self(value.to_string())
    }

    /// Returns the identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when no identity could be resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when this identity string-equals the configured
    /// administrator identity.
    #[must_use]
    pub fn is_admin(&self, admin_id: &str) -> bool {
        !self.0.is_empty() && self.0 == admin_id
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_value_wins_over_debug_override() {
        let identity = Identity::resolve(Some("42"), Some("99"));
        assert_eq!(identity.as_str(), "42");
    }

    #[test]
    fn debug_override_fills_in_for_missing_host() {
        let identity = Identity::resolve(None, Some("99"));
        assert_eq!(identity.as_str(), "99");
    }

    #[test]
    fn empty_host_value_falls_through() {
        let identity = Identity::resolve(Some(""), Some("99"));
        assert_eq!(identity.as_str(), "99");
    }

    #[test]
    fn both_absent_yields_empty_identity() {
        let identity = Identity::resolve(None, None);
        assert!(identity.is_empty());
    }

    #[test]
    fn admin_is_exact_string_equality() {
        assert!(Identity::resolve(Some("226674400"), None).is_admin("226674400"));
        assert!(!Identity::resolve(Some("22667440"), None).is_admin("226674400"));
        assert!(!Identity::resolve(Some("2266744000"), None).is_admin("226674400"));
    }

    #[test]
    fn empty_identity_is_never_admin() {
        assert!(!Identity::resolve(None, None).is_admin(""));
    }
}
