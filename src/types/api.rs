use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /health`.
///
/// Only `status` decides health. The other fields are shown as-is, so they
/// are kept as raw JSON and never fail decoding on an unexpected type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthResponse {
    pub status: Option<Value>,
    pub timestamp: Option<Value>,
    pub cache: Option<Value>,
}

impl HealthResponse {
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }

    /// Cache flags, when the service reports a `cache` object.
    pub fn cache_status(&self) -> Option<CacheStatus> {
        let cache = self.cache.as_ref()?.as_object()?;
        Some(CacheStatus {
            enabled: cache.get("enabled").and_then(Value::as_bool),
            connected: cache.get("connected").and_then(Value::as_bool),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStatus {
    pub enabled: Option<bool>,
    pub connected: Option<bool>,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flag(value: Option<bool>) -> &'static str {
            match value {
                Some(true) => "true",
                Some(false) => "false",
                None => "unknown",
            }
        }

        write!(
            f,
            "enabled={}, connected={}",
            flag(self.enabled),
            flag(self.connected)
        )
    }
}

/// Body of `POST /api/pastes`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPaste {
    pub title: String,
    pub content: String,
    pub language: String,
}

/// Response of `POST /api/pastes`. The service returns the stored document,
/// so the identifier is `_id` here but `id` on retrieval.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPaste {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<Value>,
    pub expires_at: Option<Value>,
}

/// Response of `GET /api/pastes/{id}`. Only the id is checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchedPaste {
    pub id: Option<Value>,
}

/// Render an optional JSON field for a report line. Strings are shown
/// without quotes.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "missing".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
