use std::io::Write;
use std::process::ExitCode;

use tracing::warn;

use crate::controllers::{health, paste};
use crate::error::CheckError;
use crate::report::Report;
use crate::types::{display_value, CreatedPaste};
use crate::App;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Create a test paste and read it back.
    pub create_test: bool,
    /// Delete the test paste afterwards.
    pub cleanup: bool,
    /// Fail the run when the test paste cannot be read back.
    pub strict_verify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Run the health check and, if requested, the write/read round trip.
///
/// A failed verification is reported but only fails the run under
/// `strict_verify`.
pub async fn run<W: Write>(app: &App, options: CheckOptions, report: &mut Report<W>) -> Outcome {
    report.header("PasteBox Health Check");
    report.line(format_args!("Server: {}", app.client.base_url()));
    report.blank();

    if !check_health(app, report).await {
        return Outcome::Failed;
    }

    if options.create_test {
        report.blank();

        let Some(created) = create_test_paste(app, report).await else {
            return Outcome::Failed;
        };

        let verified = verify_paste(app, &created.id, report).await;

        if options.cleanup {
            delete_test_paste(app, &created.id, report).await;
        }

        if !verified && options.strict_verify {
            return Outcome::Failed;
        }
    }

    report.passed();
    Outcome::Passed
}

pub async fn check_health<W: Write>(app: &App, report: &mut Report<W>) -> bool {
    match health::check(app).await {
        Ok(response) => {
            report.success("Server is healthy");
            report.detail("Timestamp", display_value(response.timestamp.as_ref()));
            if let Some(cache) = response.cache_status() {
                report.detail("Cache", cache);
            }
            true
        }
        Err(CheckError::InvalidJson { .. }) => {
            report.failure("Invalid JSON response from server");
            false
        }
        Err(CheckError::UnexpectedStatus(status)) => {
            report.failure(format_args!(
                "Server reported unexpected status: {}",
                status.as_deref().unwrap_or("missing")
            ));
            false
        }
        Err(err) => {
            report.failure(format_args!("Server health check failed: {err}"));
            false
        }
    }
}

pub async fn create_test_paste<W: Write>(
    app: &App,
    report: &mut Report<W>,
) -> Option<CreatedPaste> {
    match paste::create_test(app).await {
        Ok(created) => {
            report.success("Test paste created successfully");
            report.detail("ID", &created.id);
            report.detail("Title", display_value(created.title.as_ref()));
            report.detail("Expires", display_value(created.expires_at.as_ref()));
            Some(created)
        }
        Err(err @ CheckError::Status(_)) => {
            report.failure(format_args!("Failed to create paste: {err}"));
            None
        }
        Err(CheckError::InvalidJson { source }) => {
            report.failure(format_args!("Invalid JSON response from server: {source}"));
            None
        }
        Err(err) => {
            report.failure(format_args!("Connection error: {err}"));
            None
        }
    }
}

pub async fn verify_paste<W: Write>(app: &App, id: &str, report: &mut Report<W>) -> bool {
    match paste::verify(app, id).await {
        Ok(_) => {
            report.success("Paste verification successful");
            true
        }
        Err(CheckError::EmptyId) => {
            report.failure("Cannot verify paste: empty paste id");
            false
        }
        Err(err @ CheckError::Status(_)) => {
            report.failure(format_args!("Failed to retrieve paste: {err}"));
            false
        }
        Err(err @ CheckError::IdMismatch { .. }) => {
            report.failure(format_args!("Paste verification failed: {err}"));
            false
        }
        Err(CheckError::InvalidJson { source }) => {
            report.failure(format_args!("Invalid JSON response from server: {source}"));
            false
        }
        Err(err) => {
            report.failure(format_args!("Connection error: {err}"));
            false
        }
    }
}

/// Remove the test paste. Failures are warnings only.
pub async fn delete_test_paste<W: Write>(app: &App, id: &str, report: &mut Report<W>) -> bool {
    match paste::delete(app, id).await {
        Ok(()) => {
            report.success("Test paste deleted");
            true
        }
        Err(err) => {
            warn!("cleanup failed for paste '{id}': {err}");
            report.warning(format_args!("Failed to delete test paste: {err}"));
            false
        }
    }
}
