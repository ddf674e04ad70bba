#![allow(dead_code)]

use dash_config::Config;

use std::net::TcpListener;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DASHBOARD_ID: &str = "078c015e-3464-46a3-b75b-0caefddafb6a";
pub const TOKEN_PATH: &str = "/api/superset/guest-token";
pub const SUPERSET_DOMAIN: &str = "http://superset.test:8088";

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), TOKEN_PATH)
}

/// Mount a token endpoint that answers every POST with `token`.
pub async fn token_endpoint(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}

/// Defaults pointed at the mock server, with no load delay and a fast tick.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.dashboard.superset_domain = SUPERSET_DOMAIN.to_string();
    config.guest_token.endpoint = endpoint(server);
    config.session.load_delay_ms = 0;
    config.resize.interval_ms = 20;
    config
}

/// Address that refuses connections.
///
/// Binds an ephemeral port and releases it. Dropped `MockServer`s go back to
/// wiremock's pool and keep listening, so they cannot be used for this.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}{TOKEN_PATH}")
}
