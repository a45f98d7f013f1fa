//! Application configuration.
//!
//! Every timing constant in the system is a named, configurable field here
//! rather than an inline literal: the request timeout and retry cadence of
//! the pipeline, and the stagger/settle/fallback durations of the viewer.
//! Tests substitute near-zero values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the backend endpoint.
    pub api_url: String,
    /// Administrator identity; compared by exact equality.
    #[serde(default)]
    pub admin_id: String,
    /// Request pipeline knobs.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Viewer state machine knobs.
    #[serde(default)]
    pub viewer: ViewerTimings,
}

impl AppConfig {
    /// Creates a configuration with default timing knobs.
    #[must_use]
    pub fn new(api_url: impl Into<String>, admin_id: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            admin_id: admin_id.into(),
            pipeline: PipelineConfig::default(),
            viewer: ViewerTimings::default(),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the endpoint URL is empty or
    /// the retry budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::configuration("api_url must not be empty"));
        }
        if self.pipeline.max_attempts == 0 {
            return Err(Error::configuration("pipeline.max_attempts must be at least 1"));
        }
        Ok(())
    }
}

/// Request pipeline timing and retry configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Fixed delay between list attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Maximum list attempts (1 initial + N-1 retries).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
            retry_delay_ms: default_retry_delay_ms(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl PipelineConfig {
    /// Per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Delay between list attempts.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Viewer state machine durations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewerTimings {
    /// Delay between showing the blank surface and issuing the content load,
    /// in milliseconds. Staggering the two paints avoids a white-flash
    /// artifact in constrained embedded hosts.
    #[serde(default = "default_load_stagger_ms")]
    pub load_stagger_ms: u64,
    /// Delay between starting a close and resetting the surface, in
    /// milliseconds; covers the close transition.
    #[serde(default = "default_close_settle_ms")]
    pub close_settle_ms: u64,
    /// How long a content load may run before navigation falls back to an
    /// external context, in milliseconds.
    #[serde(default = "default_fallback_ms")]
    pub fallback_ms: u64,
}

impl Default for ViewerTimings {
    fn default() -> Self {
        Self {
            load_stagger_ms: default_load_stagger_ms(),
            close_settle_ms: default_close_settle_ms(),
            fallback_ms: default_fallback_ms(),
        }
    }
}

impl ViewerTimings {
    /// Blank-paint to content-load stagger.
    #[must_use]
    pub fn load_stagger(&self) -> Duration {
        Duration::from_millis(self.load_stagger_ms)
    }

    /// Close settle delay.
    #[must_use]
    pub fn close_settle(&self) -> Duration {
        Duration::from_millis(self.close_settle_ms)
    }

    /// Fallback-navigation deadline.
    #[must_use]
    pub fn fallback(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_retry_delay_ms() -> u64 {
    1_000
}

fn default_max_attempts() -> u32 {
    3
}

fn default_load_stagger_ms() -> u64 {
    150
}

fn default_close_settle_ms() -> u64 {
    250
}

fn default_fallback_ms() -> u64 {
    4_500
}
