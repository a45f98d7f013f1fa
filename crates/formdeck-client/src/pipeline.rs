//! The resilient request pipeline.
//!
//! One fixed endpoint, three actions, a uniform envelope. Listing is a pure
//! read and gets a bounded fixed-delay retry plus a single-flight guard;
//! mutations surface their first failure immediately, since retrying a
//! non-idempotent write without a dedup token risks duplicate effects.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::sleep;
use tracing::{debug, warn};

use formdeck_core::{AppConfig, CatalogEntry, Identity, PipelineConfig};

use crate::envelope::{Envelope, EntryRecord};
use crate::error::{Error, Result};

/// Outcome of a [`BackendClient::list`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// A fresh catalog was fetched; the caller should replace its cache.
    Fetched(Vec<CatalogEntry>),
    /// A fetch was already in flight; this call was dropped without a
    /// network request and the in-flight call's result stands.
    InFlight,
}

/// HTTP client for the Formdeck backend.
pub struct BackendClient {
    http: reqwest::Client,
    api_url: String,
    identity: Identity,
    config: PipelineConfig,
    list_in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path out of `list`.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl BackendClient {
    /// Creates a client from configuration and the resolved session identity.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is unusable or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &AppConfig, identity: Identity) -> formdeck_core::Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder().build().map_err(|err| {
            formdeck_core::Error::configuration(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            identity,
            config: config.pipeline,
            list_in_flight: AtomicBool::new(false),
        })
    }

    /// Returns the session identity this client attributes requests to.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Fetches the catalog.
    ///
    /// Retries failed attempts (network error, timeout, malformed body,
    /// `ok:false`) with a fixed delay up to the configured attempt budget;
    /// no delay follows the final attempt. A call arriving while another
    /// list is in flight returns [`ListOutcome::InFlight`] without issuing
    /// a request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`] with the last attempt's message once the
    /// budget is exhausted. The caller is expected to clear its catalog.
    pub async fn list(&self) -> Result<ListOutcome> {
        if self
            .list_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("duplicate list call dropped; a fetch is already in flight");
            return Ok(ListOutcome::InFlight);
        }
        let _guard = InFlightGuard(&self.list_in_flight);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt_list().await {
                Ok(entries) => {
                    debug!(count = entries.len(), attempt, "catalog fetched");
                    return Ok(ListOutcome::Fetched(entries));
                }
                Err(message) => {
                    if attempt < self.config.max_attempts {
                        warn!(
                            attempt,
                            max_attempts = self.config.max_attempts,
                            %message,
                            "list attempt failed; retrying"
                        );
                        sleep(self.config.retry_delay()).await;
                    } else {
                        return Err(Error::load(message));
                    }
                }
            }
        }
    }

    /// Saves an entry (create when `id` is empty, update otherwise; the
    /// backend discriminates on `id` presence).
    ///
    /// Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] on the first failure.
    pub async fn save(&self, entry: &CatalogEntry) -> Result<()> {
        let record = EntryRecord::from(entry);
        let params = [
            ("action", "save"),
            ("userId", self.identity.as_str()),
            ("id", record.id.as_str()),
            ("title", record.title.as_str()),
            ("desc", record.desc.as_str()),
            ("baseUrl", record.base_url.as_str()),
        ];

        let envelope = self.fetch_envelope(&params).await.map_err(Error::save)?;
        if !envelope.ok {
            return Err(Error::save(
                envelope.error.unwrap_or_else(|| "save error".to_string()),
            ));
        }
        debug!(id = %record.id, "entry saved");
        Ok(())
    }

    /// Deletes an entry by id.
    ///
    /// Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Delete`] on the first failure.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let params = [
            ("action", "delete"),
            ("userId", self.identity.as_str()),
            ("id", id),
        ];

        let envelope = self.fetch_envelope(&params).await.map_err(Error::delete)?;
        if !envelope.ok {
            return Err(Error::delete(
                envelope.error.unwrap_or_else(|| "delete error".to_string()),
            ));
        }
        debug!(%id, "entry deleted");
        Ok(())
    }

    /// Single list attempt: one request, envelope check, payload extraction.
    async fn attempt_list(&self) -> std::result::Result<Vec<CatalogEntry>, String> {
        let envelope = self.fetch_envelope(&[("action", "list")]).await?;
        if !envelope.ok {
            return Err(envelope.error.unwrap_or_else(|| "load error".to_string()));
        }
        Ok(envelope.into_entries())
    }

    /// Issues one request with the bounded per-request timeout and decodes
    /// the envelope. The backend reports failures in the envelope body, so
    /// the HTTP status is not consulted.
    async fn fetch_envelope(
        &self,
        params: &[(&str, &str)],
    ) -> std::result::Result<Envelope, String> {
        let response = self
            .http
            .get(&self.api_url)
            .query(params)
            .timeout(self.config.request_timeout())
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    format!("no response within {}ms", self.config.request_timeout_ms)
                } else {
                    format!("network error: {err}")
                }
            })?;

        let body = response
            .text()
            .await
            .map_err(|err| format!("network error: {err}"))?;

        Envelope::decode(&body)
    }
}
