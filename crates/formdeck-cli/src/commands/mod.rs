//! CLI subcommand implementations.

pub mod delete;
pub mod list;
pub mod open;
pub mod save;

use anyhow::{Context, Result};

use formdeck_app::App;
use formdeck_core::CatalogEntry;

/// Refreshes the catalog and returns the entry with the given id.
///
/// # Errors
///
/// Returns an error when the catalog cannot be loaded or the id is unknown.
pub async fn find_entry(app: &App, id: &str) -> Result<CatalogEntry> {
    if !app.orchestrator().refresh().await {
        anyhow::bail!("failed to load the catalog");
    }

    app.cache()
        .snapshot()
        .into_iter()
        .find(|entry| entry.id == id)
        .with_context(|| format!("no catalog entry with id {id}"))
}
