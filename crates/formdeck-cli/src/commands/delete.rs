//! Delete command - remove a catalog entry.

use anyhow::Result;
use clap::Args;

use formdeck_app::App;

use super::find_entry;

/// Arguments for the delete command.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the entry to delete.
    #[arg(long)]
    pub id: String,

    /// Confirm the destructive action.
    #[arg(long)]
    pub yes: bool,
}

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error when the caller is not the administrator, the entry is
/// unknown, or the delete was rejected or unconfirmed.
pub async fn execute(args: &DeleteArgs, app: &App) -> Result<()> {
    if !app.is_admin() {
        anyhow::bail!("deleting requires the administrator identity");
    }

    let entry = find_entry(app, &args.id).await?;
    if !app.orchestrator().delete(&entry).await {
        anyhow::bail!("entry was not deleted");
    }

    Ok(())
}
