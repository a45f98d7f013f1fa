//! # formdeck-core
//!
//! Core abstractions for the Formdeck form-catalog client.
//!
//! This crate provides the foundational types used across all Formdeck
//! components:
//!
//! - **Catalog Entries**: The form/document records served by the backend,
//!   plus their save-time validation rules
//! - **Identity**: Session identity resolution and the admin capability
//! - **Providers**: Document-provider detection and viewer URL templating
//! - **Configuration**: Endpoint, identity, and timing knobs
//! - **Error Types**: Shared error definitions and result types
//!
//! ## Crate Boundary
//!
//! `formdeck-core` is the only crate allowed to define shared primitives.
//! The request pipeline (`formdeck-client`) and the presentation-state layer
//! (`formdeck-app`) both depend on it and never on each other's internals.
//!
//! ## Example
//!
//! ```rust
//! use formdeck_core::entry::CatalogEntry;
//! use formdeck_core::identity::Identity;
//!
//! let identity = Identity::resolve(Some("226674400"), None);
//! let entry = CatalogEntry::new(
//!     "",
//!     "Intake Form",
//!     "New member intake",
//!     "https://docs.google.com/forms/d/e/1/viewform?usp=pp_url&entry.1=",
//! );
//! assert!(entry.validate_for_save().is_ok());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod entry;
pub mod error;
pub mod identity;
pub mod observability;
pub mod provider;

pub use config::{AppConfig, PipelineConfig, ViewerTimings};
pub use entry::CatalogEntry;
pub use error::{Error, Result};
pub use identity::Identity;
pub use provider::Provider;
