//! CRUD orchestration.
//!
//! Sequences user-initiated catalog actions: validate locally, drive the
//! request pipeline, re-list after every successful mutation, and report the
//! outcome through the host bridge. Pipeline errors never propagate past
//! this boundary — they become user-facing alerts. The local cache is never
//! mutated optimistically; one extra round trip buys agreement with the
//! backend's view.
//!
//! Privileged operations (save/delete) are only *exposed* to admins by the
//! caller; this component does not re-check the capability. The backend is
//! the actual authorization boundary and rejects unauthorized writes on its
//! own.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use formdeck_client::{BackendClient, ListOutcome};
use formdeck_core::CatalogEntry;

use crate::bridge::HostBridge;
use crate::cache::CatalogCache;

/// How long success toasts stay visible.
const TOAST_DURATION: Duration = Duration::from_millis(1_400);

/// Sequences create/edit/delete/list actions against the backend.
pub struct CrudOrchestrator {
    client: Arc<BackendClient>,
    cache: Arc<CatalogCache>,
    bridge: Arc<dyn HostBridge>,
}

impl CrudOrchestrator {
    /// Creates an orchestrator over the shared pipeline, cache, and bridge.
    #[must_use]
    pub fn new(
        client: Arc<BackendClient>,
        cache: Arc<CatalogCache>,
        bridge: Arc<dyn HostBridge>,
    ) -> Self {
        Self {
            client,
            cache,
            bridge,
        }
    }

    /// Fetches the catalog and replaces the cache with the result.
    ///
    /// A duplicate call while a fetch is in flight is a no-op (the in-flight
    /// call's eventual result stands). When the pipeline exhausts its retry
    /// budget the cache is cleared and the terminal error is surfaced as an
    /// alert.
    ///
    /// Returns `false` only on the terminal-failure path.
    pub async fn refresh(&self) -> bool {
        match self.client.list().await {
            Ok(ListOutcome::Fetched(entries)) => {
                debug!(count = entries.len(), "catalog replaced");
                self.cache.replace(entries);
                true
            }
            Ok(ListOutcome::InFlight) => true,
            Err(err) => {
                warn!(error = %err, "catalog load failed terminally");
                self.cache.clear();
                self.bridge.alert(&err.to_string());
                false
            }
        }
    }

    /// Saves a draft entry (create when `id` is empty, update otherwise).
    ///
    /// Validation failures surface as alerts and issue no network call.
    /// After a successful save the catalog is re-fetched, then a success
    /// toast is shown.
    ///
    /// Returns `true` when the entry was saved.
    pub async fn save(&self, draft: &CatalogEntry) -> bool {
        let draft = draft.trimmed();
        if let Err(err) = draft.validate_for_save() {
            self.bridge.alert(err.message());
            return false;
        }

        match self.client.save(&draft).await {
            Ok(()) => {
                self.refresh().await;
                self.bridge.toast("Saved", TOAST_DURATION);
                true
            }
            Err(err) => {
                warn!(error = %err, "save rejected");
                self.bridge.alert(&err.to_string());
                false
            }
        }
    }

    /// Deletes an entry after an explicit destructive-intent confirmation.
    ///
    /// Without confirmation nothing happens. On success the catalog is
    /// re-fetched and a toast is shown; on failure the error is surfaced and
    /// no local removal is attempted.
    ///
    /// Returns `true` when the entry was deleted.
    pub async fn delete(&self, entry: &CatalogEntry) -> bool {
        let prompt = format!("\u{201c}{}\u{201d} will be deleted.", entry.title);
        if !self.bridge.request_confirmation(&prompt).await {
            debug!(id = %entry.id, "delete not confirmed");
            return false;
        }

        match self.client.delete(&entry.id).await {
            Ok(()) => {
                self.refresh().await;
                self.bridge.toast("Deleted", TOAST_DURATION);
                true
            }
            Err(err) => {
                warn!(error = %err, "delete rejected");
                self.bridge.alert(&err.to_string());
                false
            }
        }
    }

    /// Shows an entry's details through the bridge popup.
    pub fn show_details(&self, entry: &CatalogEntry) {
        self.bridge.popup(&entry.title, &Self::entry_details(entry));
    }

    /// Formats the details body: description or a placeholder, plus the id.
    #[must_use]
    pub fn entry_details(entry: &CatalogEntry) -> String {
        let description = if entry.description.is_empty() {
            "No description"
        } else {
            &entry.description
        };
        let id = if entry.id.is_empty() { "\u{2014}" } else { &entry.id };
        format!("{description}\n\nID: {id}")
    }
}
