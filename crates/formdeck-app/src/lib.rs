//! # formdeck-app
//!
//! Presentation-state layer for the Formdeck form-catalog client.
//!
//! This crate owns everything between the request pipeline and the host
//! environment:
//!
//! - **Catalog Cache**: the in-memory catalog, wholesale-replaced on every
//!   successful list, with pure case-insensitive search
//! - **CRUD Orchestrator**: validates input, drives the pipeline, refreshes
//!   the cache after every mutation, and reports outcomes through the bridge
//! - **Document Viewer**: the embedded-viewer state machine with anti-flicker
//!   sequencing and the timed external-navigation fallback
//! - **Host Bridge**: the capability-checked interface to the embedding host,
//!   with no-op defaults for every primitive
//!
//! There are no ambient globals: [`App`] owns the moving parts and hands out
//! references.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use formdeck_app::{App, NoopBridge, NullSurface};
//! use formdeck_core::{AppConfig, Identity};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::new("https://backend.example/exec", "226674400");
//! let identity = Identity::resolve(Some("42"), None);
//! let app = App::new(config, identity, Arc::new(NoopBridge), Arc::new(NullSurface))?;
//!
//! app.start().await;
//! for entry in app.search("intake") {
//!     println!("{}", entry.title);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod app;
pub mod bridge;
pub mod cache;
pub mod orchestrator;
pub mod viewer;

pub use app::App;
pub use bridge::{ColorScheme, HapticStyle, HostBridge, NoopBridge};
pub use cache::CatalogCache;
pub use orchestrator::CrudOrchestrator;
pub use viewer::{NullSurface, Phase, Viewer, ViewerSurface};
