//! The document viewer state machine.
//!
//! Manages the embedded-viewer lifecycle: `Closed → Opening → Shown →
//! Closing`, with anti-flicker sequencing and a timed fallback to external
//! navigation.
//!
//! Opening shows the surface blank immediately, then issues the real content
//! load after a short stagger — painting "visible but blank" and "start
//! loading" in the same frame produces a white-flash artifact in constrained
//! embedded hosts. A fallback timer armed at open time navigates externally
//! exactly once if the embedded load never completes (the surface may be
//! blocked by content-security or cross-origin policy). Closing settles for
//! the duration of the close transition before the surface is reset.
//!
//! At most one session is live; re-opening tears down the previous session's
//! pending timer before arming a new one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use formdeck_core::{provider, CatalogEntry, Error, Identity, Result, ViewerTimings};

use crate::bridge::{HapticStyle, HostBridge};

/// Viewer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session; the surface is hidden. Initial and terminal.
    Closed,
    /// The surface is visible and blank; content is loading.
    Opening,
    /// Content finished loading, or control escaped to external navigation.
    Shown,
    /// A close is settling; the surface is animating out.
    Closing,
}

impl Phase {
    /// Returns true when `next` is a legal successor of this phase.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Closed, Self::Opening)
                | (Self::Opening, Self::Opening | Self::Shown | Self::Closing)
                | (Self::Shown, Self::Opening | Self::Closing)
                | (Self::Closing, Self::Opening | Self::Closed)
        )
    }
}

/// The embedded-content display area and its loading indicator.
///
/// The state machine drives the surface; the surface reports load completion
/// back through [`Viewer::content_loaded`].
pub trait ViewerSurface: Send + Sync {
    /// Makes the surface visible with a blank target, the loading indicator
    /// on, and the given display title.
    fn show_blank(&self, title: &str);

    /// Points the surface at the real content URL.
    fn begin_load(&self, url: &str);

    /// Hides the loading indicator.
    fn hide_indicator(&self);

    /// Starts the close transition.
    fn begin_close(&self);

    /// Resets the surface to a blank target, hides the loading indicator,
    /// and hides the surface.
    fn reset(&self);
}

/// A surface that renders nothing. Useful for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl ViewerSurface for NullSurface {
    fn show_blank(&self, _title: &str) {}
    fn begin_load(&self, _url: &str) {}
    fn hide_indicator(&self) {}
    fn begin_close(&self) {}
    fn reset(&self) {}
}

/// One live viewing session.
struct Session {
    url: String,
    /// First settle wins: load completion or the fallback deadline.
    settled: Arc<AtomicBool>,
    /// Whether the fallback actually navigated externally.
    fallback_fired: Arc<AtomicBool>,
    /// The stagger-then-fallback timer task.
    timer: JoinHandle<()>,
}

/// The document viewer state machine.
pub struct Viewer {
    surface: Arc<dyn ViewerSurface>,
    bridge: Arc<dyn HostBridge>,
    identity: Identity,
    timings: ViewerTimings,
    phase: Arc<Mutex<Phase>>,
    session: Mutex<Option<Session>>,
}

impl Viewer {
    /// Creates a viewer over the given surface and bridge.
    #[must_use]
    pub fn new(
        surface: Arc<dyn ViewerSurface>,
        bridge: Arc<dyn HostBridge>,
        identity: Identity,
        timings: ViewerTimings,
    ) -> Self {
        Self {
            surface,
            bridge,
            identity,
            timings,
            phase: Arc::new(Mutex::new(Phase::Closed)),
            session: Mutex::new(None),
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true when the live session's fallback navigation has fired.
    ///
    /// When the fallback fires the viewer stays nominally [`Phase::Shown`]
    /// and the surface is left visible even though control escaped to the
    /// external context; the embedder can consult this flag to decide
    /// whether to close the abandoned surface.
    #[must_use]
    pub fn fallback_fired(&self) -> bool {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|session| session.fallback_fired.load(Ordering::SeqCst))
    }

    /// URL the live session is pointed at, after provider templating.
    #[must_use]
    pub fn session_url(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.url.clone())
    }

    /// Opens an entry's document in the embedded surface.
    ///
    /// Preconditions: a non-empty identity and a non-empty document URL;
    /// form-provider URLs must additionally end with the trailing `=`
    /// assignment marker. On precondition failure the viewer state is left
    /// untouched.
    ///
    /// Any previous session's pending fallback timer is torn down before
    /// the new one is armed — no two fallback timers are ever live at once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Viewer`] when a precondition fails.
    pub fn open(&self, entry: &CatalogEntry) -> Result<()> {
        if self.identity.is_empty() {
            return Err(Error::viewer(
                "could not resolve your identity; open the app from its host or supply a debug identity",
            ));
        }
        if entry.document_url.is_empty() {
            return Err(Error::viewer("this entry has no document link"));
        }

        let url = provider::template_url(&entry.document_url, &self.identity)?;

        if let Some(previous) = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            debug!("superseding the previous viewer session");
            previous.timer.abort();
        }

        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = Phase::Opening;

        let title = if entry.title.is_empty() {
            "Document"
        } else {
            entry.title.as_str()
        };
        self.surface.show_blank(title);
        self.bridge.haptic_impulse(HapticStyle::Light);

        let settled = Arc::new(AtomicBool::new(false));
        let fallback_fired = Arc::new(AtomicBool::new(false));
        let timer = tokio::spawn(run_session(
            Arc::clone(&self.surface),
            Arc::clone(&self.bridge),
            Arc::clone(&self.phase),
            url.clone(),
            Arc::clone(&settled),
            Arc::clone(&fallback_fired),
            self.timings,
        ));

        debug!(%url, "viewer session opened");
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(Session {
            url,
            settled,
            fallback_fired,
            timer,
        });

        Ok(())
    }

    /// Reports that the embedded content finished loading.
    ///
    /// Cancels the pending fallback timer, hides the loading indicator, and
    /// transitions to [`Phase::Shown`]. A no-op when no session is live.
    pub fn content_loaded(&self) {
        let guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(session) = guard.as_ref() else {
            return;
        };

        session.settled.store(true, Ordering::SeqCst);
        session.timer.abort();
        drop(guard);

        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = Phase::Shown;
        self.surface.hide_indicator();
        debug!("embedded content loaded");
    }

    /// Closes the viewer.
    ///
    /// Transitions to [`Phase::Closing`], lets the close transition settle,
    /// then resets and hides the surface and returns to [`Phase::Closed`].
    /// The session and its pending timer are torn down immediately. A no-op
    /// when already closed or closing.
    pub async fn close(&self) {
        {
            let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
            if matches!(*phase, Phase::Closed | Phase::Closing) {
                return;
            }
            *phase = Phase::Closing;
        }

        if let Some(session) = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            session.timer.abort();
        }

        self.surface.begin_close();
        tokio::time::sleep(self.timings.close_settle()).await;

        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        // A re-open during the settle window supersedes the close.
        if *phase == Phase::Closing {
            self.surface.reset();
            *phase = Phase::Closed;
            debug!("viewer closed");
        }
    }
}

/// Staggered load followed by the fallback deadline, as one timer task.
///
/// The fallback deadline is measured from open time, so the stagger is
/// subtracted from the remaining wait.
async fn run_session(
    surface: Arc<dyn ViewerSurface>,
    bridge: Arc<dyn HostBridge>,
    phase: Arc<Mutex<Phase>>,
    url: String,
    settled: Arc<AtomicBool>,
    fallback_fired: Arc<AtomicBool>,
    timings: ViewerTimings,
) {
    tokio::time::sleep(timings.load_stagger()).await;
    surface.begin_load(&url);

    let remaining = timings.fallback().saturating_sub(timings.load_stagger());
    tokio::time::sleep(remaining).await;

    if settled.swap(true, Ordering::SeqCst) {
        return;
    }
    warn!(%url, "embedded load missed the fallback deadline; navigating externally");
    fallback_fired.store(true, Ordering::SeqCst);
    bridge.open_external(&url);
    *phase.lock().unwrap_or_else(PoisonError::into_inner) = Phase::Shown;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        assert!(Phase::Closed.can_transition_to(Phase::Opening));
        assert!(Phase::Opening.can_transition_to(Phase::Shown));
        assert!(Phase::Opening.can_transition_to(Phase::Opening));
        assert!(Phase::Shown.can_transition_to(Phase::Closing));
        assert!(Phase::Closing.can_transition_to(Phase::Closed));
        assert!(Phase::Closing.can_transition_to(Phase::Opening));

        assert!(!Phase::Closed.can_transition_to(Phase::Shown));
        assert!(!Phase::Closed.can_transition_to(Phase::Closing));
        assert!(!Phase::Shown.can_transition_to(Phase::Closed));
    }
}
