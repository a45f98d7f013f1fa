//! The host bridge interface.
//!
//! The embedding host (a chat client's web-app container, a browser shell, a
//! terminal) supplies cosmetic and navigational primitives: dialogs, toasts,
//! haptics, external navigation, viewport control. Every primitive is
//! best-effort — the core must keep working when the host provides none of
//! them — so each trait method has a no-op default and implementors override
//! only what their host can do.
//!
//! The one primitive with semantic weight is [`HostBridge::request_confirmation`]:
//! destructive actions go through it, and its default answer is `false`, so a
//! host without a confirmation dialog can never trigger a delete.

use std::time::Duration;

use async_trait::async_trait;

/// The host-reported color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

/// Strength of a haptic impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticStyle {
    /// A light tap.
    Light,
    /// A medium tap.
    Medium,
    /// A heavy tap.
    Heavy,
}

/// Capability interface to the embedding host.
///
/// All methods default to no-ops; absence of any primitive must not crash
/// the core, which simply degrades by skipping the cosmetic effect.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Signals that the client is initialized and ready to be shown.
    fn ready(&self) {}

    /// Returns the host's current color scheme.
    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::default()
    }

    /// Shows a blocking alert with a message.
    fn alert(&self, _message: &str) {}

    /// Shows an informational popup with a title and body.
    fn popup(&self, _title: &str, _message: &str) {}

    /// Asks the user to acknowledge a destructive action.
    ///
    /// Returns `true` only when the user explicitly confirmed. The default
    /// is `false`: without a real dialog primitive, destructive actions do
    /// not proceed.
    async fn request_confirmation(&self, _prompt: &str) -> bool {
        false
    }

    /// Shows a transient toast.
    fn toast(&self, _text: &str, _duration: Duration) {}

    /// Fires a haptic impulse.
    fn haptic_impulse(&self, _style: HapticStyle) {}

    /// Opens a URL outside the embedded surface.
    fn open_external(&self, _url: &str) {}

    /// Expands the host viewport to its full height.
    fn expand_viewport(&self) {}

    /// Disables the host's swipe-to-dismiss gesture.
    fn disable_swipe_dismiss(&self) {}
}

/// A bridge that provides none of the host primitives.
///
/// Useful for tests and for running the core fully headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBridge;

#[async_trait]
impl HostBridge for NoopBridge {}
