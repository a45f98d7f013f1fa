//! # formdeck-cli
//!
//! Command-line interface for the Formdeck form catalog.
//!
//! ## Commands
//!
//! - `formdeck list` - Fetch and search the catalog
//! - `formdeck save` - Create or update an entry (admin)
//! - `formdeck delete` - Delete an entry (admin, requires `--yes`)
//! - `formdeck open` - Resolve an entry's templated viewer URL
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags for settings:
//!
//! - `FORMDECK_API_URL` - Backend endpoint
//! - `FORMDECK_USER_ID` - Debug identity override (no host supplies one here)
//! - `FORMDECK_ADMIN_ID` - Administrator identity for the capability check

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod bridge;
pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use formdeck_core::{AppConfig, Identity};

/// Formdeck CLI - form-catalog client.
#[derive(Debug, Parser)]
#[command(name = "formdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend endpoint URL.
    #[arg(long, env = "FORMDECK_API_URL")]
    pub api_url: String,

    /// Session identity (the headless debug override).
    #[arg(long, env = "FORMDECK_USER_ID", default_value = "")]
    pub user_id: String,

    /// Administrator identity.
    #[arg(long, env = "FORMDECK_ADMIN_ID", default_value = "")]
    pub admin_id: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the application configuration from the parsed flags.
    #[must_use]
    pub fn config(&self) -> AppConfig {
        AppConfig::new(&self.api_url, &self.admin_id)
    }

    /// Resolves the session identity. The CLI has no host context, so the
    /// user-supplied value plays the debug-override role.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::resolve(None, Some(&self.user_id))
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON.
    Json,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the catalog and print (optionally filtered) entries.
    List(commands::list::ListArgs),
    /// Create or update a catalog entry.
    Save(commands::save::SaveArgs),
    /// Delete a catalog entry.
    Delete(commands::delete::DeleteArgs),
    /// Resolve an entry's templated viewer URL.
    Open(commands::open::OpenArgs),
}
