use tracing::info;

use crate::error::{CheckError, CheckResult};
use crate::types::{display_value, HealthResponse};
use crate::App;

/// Status value the service reports when it is healthy.
pub const STATUS_OK: &str = "ok";

pub async fn check(app: &App) -> CheckResult<HealthResponse> {
    let health = app.client.health().await?;

    if health.status() != Some(STATUS_OK) {
        return Err(CheckError::UnexpectedStatus(
            health.status.as_ref().map(|status| display_value(Some(status))),
        ));
    }

    info!("server healthy: timestamp={:?}", health.timestamp);
    Ok(health)
}
