//! Open command - resolve an entry's templated viewer URL.

use anyhow::{Context, Result};
use clap::Args;

use formdeck_app::App;
use formdeck_core::provider;

use super::find_entry;

/// Arguments for the open command.
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Id of the entry to open.
    #[arg(long)]
    pub id: String,
}

/// Execute the open command.
///
/// Prints the URL the embedded viewer (or its external fallback) would
/// navigate to, after provider templating.
///
/// # Errors
///
/// Returns an error when the entry is unknown or a viewer precondition
/// fails (missing identity, malformed form URL).
pub async fn execute(args: &OpenArgs, app: &App) -> Result<()> {
    let entry = find_entry(app, &args.id).await?;

    if app.identity().is_empty() {
        anyhow::bail!("an identity is required to open documents; pass --user-id");
    }
    if entry.document_url.is_empty() {
        anyhow::bail!("this entry has no document link");
    }

    let url = provider::template_url(&entry.document_url, app.identity())
        .context("could not resolve the viewer URL")?;
    println!("{url}");

    Ok(())
}
