//! Viewer state machine tests on a paused clock.

#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use formdeck_app::{HostBridge, Phase, Viewer, ViewerSurface};
use formdeck_core::{CatalogEntry, Identity, ViewerTimings};

/// Surface double that records every call in order.
#[derive(Debug, Default)]
struct RecordingSurface {
    events: Mutex<Vec<String>>,
}

impl RecordingSurface {
    fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }

    fn push(&self, event: String) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl ViewerSurface for RecordingSurface {
    fn show_blank(&self, title: &str) {
        self.push(format!("blank:{title}"));
    }

    fn begin_load(&self, url: &str) {
        self.push(format!("load:{url}"));
    }

    fn hide_indicator(&self) {
        self.push("indicator-off".to_string());
    }

    fn begin_close(&self) {
        self.push("closing".to_string());
    }

    fn reset(&self) {
        self.push("reset".to_string());
    }
}

/// Bridge double that counts haptics and records external navigations.
#[derive(Debug, Default)]
struct RecordingBridge {
    external: Mutex<Vec<String>>,
    haptics: AtomicUsize,
}

impl RecordingBridge {
    fn external(&self) -> Vec<String> {
        self.external.lock().expect("external lock").clone()
    }
}

#[async_trait]
impl HostBridge for RecordingBridge {
    fn haptic_impulse(&self, _style: formdeck_app::HapticStyle) {
        self.haptics.fetch_add(1, Ordering::SeqCst);
    }

    fn open_external(&self, url: &str) {
        self.external
            .lock()
            .expect("external lock")
            .push(url.to_string());
    }
}

fn timings() -> ViewerTimings {
    ViewerTimings {
        load_stagger_ms: 150,
        close_settle_ms: 250,
        fallback_ms: 4_500,
    }
}

fn form_entry() -> CatalogEntry {
    CatalogEntry::new(
        "1",
        "Intake Form",
        "",
        "https://docs.google.com/forms/d/e/1/viewform?usp=pp_url&entry.1=",
    )
}

fn viewer_fixture() -> (Viewer, Arc<RecordingSurface>, Arc<RecordingBridge>) {
    let surface = Arc::new(RecordingSurface::default());
    let bridge = Arc::new(RecordingBridge::default());
    let viewer = Viewer::new(
        Arc::clone(&surface) as Arc<dyn ViewerSurface>,
        Arc::clone(&bridge) as Arc<dyn HostBridge>,
        Identity::resolve(Some("42"), None),
        timings(),
    );
    (viewer, surface, bridge)
}

/// Advances the paused clock and lets timer tasks run.
///
/// Yields before advancing so freshly spawned tasks register their timers
/// against the pre-advance clock, and after so woken tasks get to run.
async fn advance(duration: Duration) {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    tokio::time::advance(duration).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn open_shows_blank_immediately_and_staggers_the_load() {
    let (viewer, surface, bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open");
    assert_eq!(viewer.phase(), Phase::Opening);
    assert_eq!(surface.events(), ["blank:Intake Form"]);
    assert_eq!(bridge.haptics.load(Ordering::SeqCst), 1);

    advance(Duration::from_millis(151)).await;
    let events = surface.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[1],
        "load:https://docs.google.com/forms/d/e/1/viewform?usp=pp_url&entry.1=42&embedded=true"
    );
}

#[tokio::test(start_paused = true)]
async fn templated_url_appends_identity_and_embed_flag() {
    let (viewer, _surface, _bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open");
    assert_eq!(
        viewer.session_url().expect("live session"),
        "https://docs.google.com/forms/d/e/1/viewform?usp=pp_url&entry.1=42&embedded=true"
    );
}

#[tokio::test(start_paused = true)]
async fn content_load_cancels_the_fallback() {
    let (viewer, surface, bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open");
    advance(Duration::from_millis(151)).await;

    viewer.content_loaded();
    assert_eq!(viewer.phase(), Phase::Shown);
    assert!(surface.events().contains(&"indicator-off".to_string()));

    // Long past the fallback deadline: no external navigation happens.
    advance(Duration::from_secs(10)).await;
    assert!(bridge.external().is_empty());
    assert!(!viewer.fallback_fired());
}

#[tokio::test(start_paused = true)]
async fn fallback_fires_exactly_once_when_load_never_completes() {
    let (viewer, _surface, bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open");
    advance(Duration::from_millis(151)).await;
    advance(Duration::from_millis(4_400)).await;

    let external = bridge.external();
    assert_eq!(external.len(), 1);
    assert!(external[0].ends_with("entry.1=42&embedded=true"));
    assert!(viewer.fallback_fired());
    // Control escaped externally; the surface is left nominally shown.
    assert_eq!(viewer.phase(), Phase::Shown);

    advance(Duration::from_secs(30)).await;
    assert_eq!(bridge.external().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn reopen_supersedes_the_previous_fallback_timer() {
    let (viewer, _surface, bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open first");
    advance(Duration::from_secs(1)).await;

    let second = CatalogEntry::new(
        "2",
        "Feedback",
        "",
        "https://docs.google.com/forms/d/e/2/viewform?entry.9=",
    );
    viewer.open(&second).expect("open second");
    // Let the new session's load stagger settle before advancing past its
    // fallback deadline, so the two-stage timer fires on the paused clock.
    advance(Duration::from_millis(151)).await;
    advance(Duration::from_secs(10)).await;

    // Only the second session's fallback navigated; the first was torn down.
    let external = bridge.external();
    assert_eq!(external.len(), 1);
    assert!(external[0].contains("/d/e/2/"));
}

#[tokio::test(start_paused = true)]
async fn close_settles_then_resets_the_surface() {
    let (viewer, surface, _bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open");
    advance(Duration::from_millis(151)).await;
    viewer.content_loaded();

    viewer.close().await;
    assert_eq!(viewer.phase(), Phase::Closed);

    let events = surface.events();
    let closing_at = events.iter().position(|e| e == "closing").expect("closing");
    let reset_at = events.iter().position(|e| e == "reset").expect("reset");
    assert!(closing_at < reset_at);
}

#[tokio::test(start_paused = true)]
async fn close_tears_down_a_pending_fallback() {
    let (viewer, _surface, bridge) = viewer_fixture();

    viewer.open(&form_entry()).expect("open");
    viewer.close().await;
    assert_eq!(viewer.phase(), Phase::Closed);

    advance(Duration::from_secs(10)).await;
    assert!(bridge.external().is_empty());
}

#[tokio::test(start_paused = true)]
async fn close_when_already_closed_is_a_no_op() {
    let (viewer, surface, _bridge) = viewer_fixture();

    viewer.close().await;
    assert_eq!(viewer.phase(), Phase::Closed);
    assert!(surface.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn open_requires_an_identity() {
    let surface = Arc::new(RecordingSurface::default());
    let bridge = Arc::new(RecordingBridge::default());
    let viewer = Viewer::new(
        Arc::clone(&surface) as Arc<dyn ViewerSurface>,
        bridge as Arc<dyn HostBridge>,
        Identity::resolve(None, None),
        timings(),
    );

    let err = viewer.open(&form_entry()).expect_err("open must fail");
    assert!(matches!(err, formdeck_core::Error::Viewer { .. }));
    assert_eq!(viewer.phase(), Phase::Closed);
    assert!(surface.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn open_requires_a_document_link() {
    let (viewer, surface, _bridge) = viewer_fixture();

    let entry = CatalogEntry::new("1", "No Link", "", "");
    assert!(viewer.open(&entry).is_err());
    assert_eq!(viewer.phase(), Phase::Closed);
    assert!(surface.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn open_rejects_a_form_url_without_the_assignment_marker() {
    let (viewer, surface, _bridge) = viewer_fixture();

    let entry = CatalogEntry::new(
        "1",
        "Broken",
        "",
        "https://docs.google.com/forms/d/e/1/viewform",
    );
    let err = viewer.open(&entry).expect_err("open must fail");
    assert!(matches!(err, formdeck_core::Error::Viewer { .. }));
    assert!(surface.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn slide_deck_urls_are_rewritten_for_embedding() {
    let (viewer, _surface, _bridge) = viewer_fixture();

    let entry = CatalogEntry::new(
        "3",
        "Town Hall Deck",
        "",
        "https://docs.google.com/presentation/d/e/2PACX-abc/pub?start=false",
    );
    viewer.open(&entry).expect("open");
    assert_eq!(
        viewer.session_url().expect("live session"),
        "https://docs.google.com/presentation/d/e/2PACX-abc/embed?start=false"
    );
}
