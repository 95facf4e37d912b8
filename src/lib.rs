pub mod client;
pub mod commands;
pub mod config;
pub mod controllers;
pub mod error;
pub mod report;
pub mod types;

pub use client::PasteBoxClient;
pub use config::Config;
pub use error::{CheckError, CheckResult};

pub struct App {
    pub client: PasteBoxClient,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = PasteBoxClient::new(&config.server, config.timeouts)?;
        Ok(App { client })
    }
}
