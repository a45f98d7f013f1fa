//! Application state.
//!
//! [`App`] owns every moving part — configuration, identity, bridge handle,
//! pipeline client, catalog cache, orchestrator, viewer — and hands out
//! references. Components never reach for ambient globals.

use std::sync::Arc;

use formdeck_client::BackendClient;
use formdeck_core::{AppConfig, CatalogEntry, Identity};

use crate::bridge::HostBridge;
use crate::cache::CatalogCache;
use crate::orchestrator::CrudOrchestrator;
use crate::viewer::{Viewer, ViewerSurface};

/// The assembled Formdeck application.
pub struct App {
    config: AppConfig,
    identity: Identity,
    bridge: Arc<dyn HostBridge>,
    cache: Arc<CatalogCache>,
    orchestrator: CrudOrchestrator,
    viewer: Viewer,
}

impl App {
    /// Wires up the application from its collaborators.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the config is unusable.
    pub fn new(
        config: AppConfig,
        identity: Identity,
        bridge: Arc<dyn HostBridge>,
        surface: Arc<dyn ViewerSurface>,
    ) -> formdeck_core::Result<Self> {
        let client = Arc::new(BackendClient::new(&config, identity.clone())?);
        let cache = Arc::new(CatalogCache::new());
        let orchestrator =
            CrudOrchestrator::new(Arc::clone(&client), Arc::clone(&cache), Arc::clone(&bridge));
        let viewer = Viewer::new(
            surface,
            Arc::clone(&bridge),
            identity.clone(),
            config.viewer,
        );

        Ok(Self {
            config,
            identity,
            bridge,
            cache,
            orchestrator,
            viewer,
        })
    }

    /// Signals host readiness and performs the initial catalog load.
    ///
    /// Returns `false` when the initial load failed terminally.
    pub async fn start(&self) -> bool {
        self.bridge.ready();
        self.orchestrator.refresh().await
    }

    /// True when the session identity matches the configured administrator.
    ///
    /// Privileged orchestrator operations must not be invoked when this is
    /// false; the backend independently rejects unauthorized writes.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.is_admin(&self.config.admin_id)
    }

    /// The resolved session identity.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Searches the cached catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        self.cache.search(query)
    }

    /// The catalog cache.
    #[must_use]
    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// The CRUD orchestrator.
    #[must_use]
    pub fn orchestrator(&self) -> &CrudOrchestrator {
        &self.orchestrator
    }

    /// The document viewer.
    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}
