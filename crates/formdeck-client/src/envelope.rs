//! Backend wire envelope.
//!
//! Every backend response is `{ ok: boolean, data?: any, error?: string }`.
//! Only `list` carries a payload: an array of raw entry records using the
//! backend's field names (`desc`, `baseUrl`). Anything that is not an array
//! is normalized to an empty catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use formdeck_core::CatalogEntry;

/// The uniform backend response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Whether the backend accepted the request.
    pub ok: bool,
    /// Action-specific payload; only `list` populates it.
    #[serde(default)]
    pub data: Option<Value>,
    /// Backend-supplied failure message when `ok` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Parses a response body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message carrying the raw body text when the
    /// body is not a structurally valid envelope.
    pub fn decode(body: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(body).map_err(|_| format!("bad JSON in response: {body}"))
    }

    /// Extracts the catalog entries from a `list` payload.
    ///
    /// A missing or non-array `data` field normalizes to an empty catalog;
    /// array elements that are not objects normalize to empty records, as
    /// the backend's own renderer treats every field as optional.
    #[must_use]
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self.data {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value::<EntryRecord>(item)
                        .unwrap_or_default()
                        .into()
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Raw entry record in the backend's field naming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Backend-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Description, under the backend's `desc` key.
    #[serde(default)]
    pub desc: String,
    /// Templated document link, under the backend's `baseUrl` key.
    #[serde(default, rename = "baseUrl")]
    pub base_url: String,
}

impl From<EntryRecord> for CatalogEntry {
    fn from(record: EntryRecord) -> Self {
        CatalogEntry::new(record.id, record.title, record.desc, record.base_url)
    }
}

impl From<&CatalogEntry> for EntryRecord {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            desc: entry.description.clone(),
            base_url: entry.document_url.clone(),
        }
    }
}
