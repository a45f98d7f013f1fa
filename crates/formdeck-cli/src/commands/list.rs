//! List command - fetch and search the catalog.

use anyhow::{Context, Result};
use clap::Args;

use formdeck_app::App;

use crate::OutputFormat;

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring filter on title or description.
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error when the catalog cannot be loaded.
pub async fn execute(args: &ListArgs, app: &App, format: OutputFormat) -> Result<()> {
    if !app.start().await {
        anyhow::bail!("failed to load the catalog");
    }

    let entries = app.search(&args.query);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).context("Failed to serialize entries")?
            );
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("Nothing found");
                return Ok(());
            }
            for entry in &entries {
                let id = if entry.id.is_empty() { "-" } else { &entry.id };
                if entry.description.is_empty() {
                    println!("{id}\t{}", entry.title);
                } else {
                    println!("{id}\t{}\t{}", entry.title, entry.description);
                }
            }
        }
    }

    Ok(())
}
