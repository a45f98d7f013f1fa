//! # formdeck-client
//!
//! Resilient request pipeline for the Formdeck backend.
//!
//! The backend is a single query-parameterized HTTP endpoint with three
//! actions (`list`, `save`, `delete`) and a uniform JSON envelope
//! `{ ok, data?, error? }`. This crate is the only network boundary in the
//! system and provides:
//!
//! - **Bounded timeouts**: every request is aborted when no response arrives
//!   in time; an aborted request counts as a network failure
//! - **Bounded retry**: `list` is retried with a fixed delay up to a
//!   configured attempt budget; mutations are never retried
//! - **Envelope validation**: malformed bodies and `ok:false` responses are
//!   surfaced as errors carrying the backend's own message
//! - **Single-flight listing**: a `list` arriving while one is in flight is
//!   dropped without issuing a second network call
//!
//! ## Example
//!
//! ```rust,no_run
//! use formdeck_client::{BackendClient, ListOutcome};
//! use formdeck_core::{AppConfig, Identity};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::new("https://backend.example/exec", "226674400");
//! let identity = Identity::resolve(Some("42"), None);
//! let client = BackendClient::new(&config, identity)?;
//!
//! if let ListOutcome::Fetched(entries) = client.list().await? {
//!     println!("{} entries", entries.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod envelope;
pub mod error;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{BackendClient, ListOutcome};
