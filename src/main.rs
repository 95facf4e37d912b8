use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use pastebox_healthcheck::commands::check::{self, CheckOptions, Outcome};
use pastebox_healthcheck::report::Report;
use pastebox_healthcheck::{App, Config};

/// PasteBox Health Check
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Server URL [default: config file, then http://localhost:5000]
    #[arg(long, env = "PASTEBOX_SERVER")]
    server: Option<String>,

    /// Create a test paste to verify write operations
    #[arg(long)]
    create_test: bool,

    /// Delete the test paste once it has been verified
    #[arg(long, requires = "create_test")]
    cleanup: bool,

    /// Fail when the test paste cannot be read back
    #[arg(long, requires = "create_test")]
    strict_verify: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable coloured output (also disabled by a non-empty NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> CheckOptions {
        CheckOptions {
            create_test: self.create_test,
            cleanup: self.cleanup,
            strict_verify: self.strict_verify,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.verbose);

    match run(args).await {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            Outcome::Failed.into()
        }
    }
}

async fn run(args: Args) -> anyhow::Result<Outcome> {
    let config = resolve_config(args.config.as_deref(), args.server.clone())
        .context("failed to load config")?;
    let app = App::new(config).context("failed to build HTTP client")?;

    let color = use_color(args.no_color, std::env::var_os("NO_COLOR"));
    let mut report = Report::stdout(color);
    Ok(check::run(&app, args.options(), &mut report).await)
}

/// Load the config file and let a server given on the command line (or via
/// `PASTEBOX_SERVER`) override it.
fn resolve_config(path: Option<&Path>, server: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::load(path)?;
    if let Some(server) = server {
        config.server = server;
    }
    Ok(config)
}

/// Any non-empty `NO_COLOR` disables colour.
fn use_color(no_color_flag: bool, no_color_env: Option<OsString>) -> bool {
    !no_color_flag && !no_color_env.is_some_and(|value| !value.is_empty())
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn create_test_flags() {
        let args = Args::try_parse_from([
            "pastebox-healthcheck",
            "--server",
            "http://paste.local",
            "--create-test",
            "--cleanup",
            "--strict-verify",
        ])
        .unwrap();

        let options = args.options();
        assert!(options.create_test);
        assert!(options.cleanup);
        assert!(options.strict_verify);
        assert_eq!(args.server.as_deref(), Some("http://paste.local"));
    }

    #[test]
    fn cleanup_requires_create_test() {
        let err = Args::try_parse_from(["pastebox-healthcheck", "--cleanup"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Args::try_parse_from(["pastebox-healthcheck", "--strict-verify"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn server_env_var_is_read() {
        // only this test touches PASTEBOX_SERVER
        std::env::set_var("PASTEBOX_SERVER", "http://from-env:5000");
        let args = Args::try_parse_from(["pastebox-healthcheck"]);
        std::env::remove_var("PASTEBOX_SERVER");

        assert_eq!(args.unwrap().server.as_deref(), Some("http://from-env:5000"));
    }

    #[test]
    fn verbose_counts_occurrences() {
        let args = Args::try_parse_from(["pastebox-healthcheck", "-vv", "--no-color"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.no_color);
        assert_eq!(log_level(args.verbose), "debug");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(0), "warn");
    }

    #[test]
    fn server_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server = \"http://from-file:5000\"").unwrap();

        let config = resolve_config(Some(file.path()), None).unwrap();
        assert_eq!(config.server, "http://from-file:5000");

        let config =
            resolve_config(Some(file.path()), Some("http://from-flag:5000".into())).unwrap();
        assert_eq!(config.server, "http://from-flag:5000");
    }

    #[test]
    fn no_color_env_follows_convention() {
        assert!(use_color(false, None));
        assert!(use_color(false, Some(OsString::new())));
        assert!(!use_color(false, Some("1".into())));
        assert!(!use_color(false, Some("0".into())));
        assert!(!use_color(false, Some("false".into())));
        assert!(!use_color(true, None));
    }
}
