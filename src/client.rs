use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use crate::config::Timeouts;
use crate::error::{CheckError, CheckResult};
use crate::types::{CreatedPaste, FetchedPaste, HealthResponse, NewPaste};

/// HTTP client for the PasteBox REST API.
///
/// Every call is a single attempt bounded by its own timeout. Idle
/// connections are not kept, so each request opens and closes its own.
#[derive(Debug, Clone)]
pub struct PasteBoxClient {
    http: Client,
    base_url: String,
    timeouts: Timeouts,
}

impl PasteBoxClient {
    pub fn new(base_url: &str, timeouts: Timeouts) -> anyhow::Result<Self> {
        let http = Client::builder().pool_max_idle_per_host(0).build()?;

        Ok(PasteBoxClient {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeouts,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health(&self) -> CheckResult<HealthResponse> {
        let url = self.url("/health");
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .timeout(self.timeouts.health())
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /api/pastes`
    pub async fn create_paste(&self, paste: &NewPaste) -> CheckResult<CreatedPaste> {
        let url = self.url("/api/pastes");
        debug!("POST {url}: title='{}'", paste.title);
        let response = self
            .http
            .post(&url)
            .json(paste)
            .timeout(self.timeouts.create())
            .send()
            .await?;
        read_json(response).await
    }

    /// `GET /api/pastes/{id}`
    pub async fn get_paste(&self, id: &str) -> CheckResult<FetchedPaste> {
        let url = self.url(&paste_path(id));
        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .timeout(self.timeouts.fetch())
            .send()
            .await?;
        read_json(response).await
    }

    /// `DELETE /api/pastes/{id}`
    pub async fn delete_paste(&self, id: &str) -> CheckResult<()> {
        let url = self.url(&paste_path(id));
        debug!("DELETE {url}");
        let response = self
            .http
            .delete(&url)
            .timeout(self.timeouts.fetch())
            .send()
            .await?;
        check_status(&response)
    }

    fn url(&self, path: &str) -> String {
        format!("{base_url}{path}", base_url = self.base_url)
    }
}

fn paste_path(id: &str) -> String {
    format!("/api/pastes/{id}", id = encode(id))
}

fn check_status(response: &Response) -> CheckResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(CheckError::Status(status))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> CheckResult<T> {
    check_status(&response)?;
    // read the whole body first so a dropped connection and a bad payload
    // surface as different errors
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
