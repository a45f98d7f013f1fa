//! Catalog entry model and save-time validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::provider;

/// One form/document listing in the catalog.
///
/// Entries are created locally with an empty `id`; the backend assigns the
/// real identifier on save. The client never enforces `id` uniqueness — the
/// backend is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Opaque backend identifier; empty for not-yet-created entries.
    #[serde(default)]
    pub id: String,
    /// Display title. Required, non-empty after trimming.
    pub title: String,
    /// Free-form description. Optional; empty is allowed.
    #[serde(default)]
    pub description: String,
    /// Templated link to the external document.
    pub document_url: String,
}

impl CatalogEntry {
    /// Creates an entry from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        document_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            document_url: document_url.into(),
        }
    }

    /// Returns a draft with every field trimmed, ready for validation.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            document_url: self.document_url.trim().to_string(),
        }
    }

    /// Checks the invariants required before an entry may be saved.
    ///
    /// The title must be non-empty after trimming, and the document URL must
    /// be a prefilled form link: it has to contain the `entry.` prefill
    /// marker and end with the trailing `=` so an identity token can be
    /// appended at open time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] with a user-facing message; no network
    /// call is made on the rejection path.
    pub fn validate_for_save(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("a form title is required"));
        }

        let url = self.document_url.trim();
        if !url.contains(provider::ENTRY_PREFILL_MARKER) || !url.ends_with(provider::ASSIGNMENT_MARKER)
        {
            return Err(Error::validation(
                "the link must be a prefilled form URL containing entry.XXXX and ending with \"=\"",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, url: &str) -> CatalogEntry {
        CatalogEntry::new("", title, "", url)
    }

    #[test]
    fn valid_draft_passes() {
        let entry = draft(
            "Intake Form",
            "https://docs.google.com/forms/d/e/1/viewform?usp=pp_url&entry.1=",
        );
        assert!(entry.validate_for_save().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let entry = draft("", "https://x/entry.1=");
        let err = entry.validate_for_save().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let entry = draft("   ", "https://x/entry.1=");
        assert!(entry.validate_for_save().is_err());
    }

    #[test]
    fn url_without_prefill_marker_is_rejected() {
        let entry = draft("X", "https://docs.google.com/forms/d/e/1/viewform=");
        assert!(entry.validate_for_save().is_err());
    }

    #[test]
    fn url_without_trailing_assignment_is_rejected() {
        let entry = draft("X", "https://x/forms/d/e/1?entry.1=abc");
        assert!(entry.validate_for_save().is_err());
    }

    #[test]
    fn trimmed_normalizes_every_field() {
        let entry = CatalogEntry::new(" 7 ", " A ", " b ", " https://x/entry.1= ");
        let t = entry.trimmed();
        assert_eq!(t.id, "7");
        assert_eq!(t.title, "A");
        assert_eq!(t.description, "b");
        assert_eq!(t.document_url, "https://x/entry.1=");
    }

    #[test]
    fn wire_field_names_round_trip() {
        let entry = draft("Feedback", "https://x/entry.2=");
        let json = serde_json::to_string(&entry).unwrap();
        let back: CatalogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
