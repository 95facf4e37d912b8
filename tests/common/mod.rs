#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use pastebox_healthcheck::report::Report;
use pastebox_healthcheck::{App, Config};

/// Address nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let server = axum::Server::bind(&addr).serve(router.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    format!("http://{addr}")
}

pub fn app(server: &str) -> App {
    App::new(Config {
        server: server.to_owned(),
        ..Default::default()
    })
    .unwrap()
}

pub fn new_report() -> Report<Vec<u8>> {
    Report::new(Vec::new(), false)
}

pub fn output(report: Report<Vec<u8>>) -> String {
    String::from_utf8(report.into_inner()).unwrap()
}
