use reqwest::StatusCode;
use thiserror::Error;

pub type CheckResult<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CheckError {
    #[error("{source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },
    #[error("unexpected status: {}", .0.as_deref().unwrap_or("missing"))]
    UnexpectedStatus(Option<String>),
    #[error("expected id {expected}, got {}", .actual.as_deref().unwrap_or("missing"))]
    IdMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error("empty paste id")]
    EmptyId,
}
