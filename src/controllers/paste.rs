use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use tracing::info;

use crate::error::{CheckError, CheckResult};
use crate::types::{display_value, CreatedPaste, FetchedPaste, NewPaste};
use crate::App;

pub const TEST_TITLE_PREFIX: &str = "Health Check Test - ";
pub const TEST_LANGUAGE: &str = "javascript";
const TEST_CONTENT: &str =
    "// This is a test paste created by healthcheck\nconsole.log('Hello, PasteBox!');";

/// Build the payload for a test paste titled with the given local time.
pub fn test_paste(now: NaiveDateTime) -> NewPaste {
    NewPaste {
        title: format!(
            "{TEST_TITLE_PREFIX}{timestamp}",
            timestamp = now.format("%Y-%m-%dT%H:%M:%S%.6f")
        ),
        content: TEST_CONTENT.to_owned(),
        language: TEST_LANGUAGE.to_owned(),
    }
}

pub async fn create_test(app: &App) -> CheckResult<CreatedPaste> {
    let paste = test_paste(Local::now().naive_local());
    let created = app.client.create_paste(&paste).await?;
    info!("created test paste: id='{}'", created.id);
    Ok(created)
}

/// Fetch a paste back and make sure the service returns the same id.
pub async fn verify(app: &App, id: &str) -> CheckResult<FetchedPaste> {
    if id.is_empty() {
        return Err(CheckError::EmptyId);
    }

    let fetched = app.client.get_paste(id).await?;
    if fetched.id.as_ref().and_then(Value::as_str) != Some(id) {
        return Err(CheckError::IdMismatch {
            expected: id.to_owned(),
            actual: fetched.id.as_ref().map(|actual| display_value(Some(actual))),
        });
    }

    info!("verified paste: id='{id}'");
    Ok(fetched)
}

pub async fn delete(app: &App, id: &str) -> CheckResult<()> {
    if id.is_empty() {
        return Err(CheckError::EmptyId);
    }

    app.client.delete_paste(id).await?;
    info!("deleted test paste: id='{id}'");
    Ok(())
}
