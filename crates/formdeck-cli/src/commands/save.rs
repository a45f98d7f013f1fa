//! Save command - create or update a catalog entry.

use anyhow::Result;
use clap::Args;

use formdeck_app::App;
use formdeck_core::CatalogEntry;

/// Arguments for the save command.
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Entry id to update; omit to create a new entry.
    #[arg(long, default_value = "")]
    pub id: String,

    /// Entry title.
    #[arg(long)]
    pub title: String,

    /// Entry description.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Prefilled form URL (must contain entry.XXXX and end with "=").
    #[arg(long)]
    pub url: String,
}

/// Execute the save command.
///
/// # Errors
///
/// Returns an error when the caller is not the administrator or the save
/// was rejected.
pub async fn execute(args: &SaveArgs, app: &App) -> Result<()> {
    if !app.is_admin() {
        anyhow::bail!("saving requires the administrator identity");
    }

    let draft = CatalogEntry::new(&args.id, &args.title, &args.description, &args.url);
    if !app.orchestrator().save(&draft).await {
        anyhow::bail!("entry was not saved");
    }

    Ok(())
}
