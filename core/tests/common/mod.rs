//! Starts the recording mock server on an ephemeral port and points a
//! `Clickup` client at it.

#![allow(dead_code)]

use clickup_core::{Clickup, ClientOptions};
use mock_server::{Log, RecordedRequest};
use serde_json::Value;

pub const TOKEN: &str = "pk_test_token";

pub struct Harness {
    pub clickup: Clickup,
    pub log: Log,
    pub prefix_url: String,
}

pub async fn start() -> Harness {
    start_with(|options| options).await
}

/// `configure` runs after the prefix URL is set, so it may override it.
pub async fn start_with(configure: impl FnOnce(ClientOptions) -> ClientOptions) -> Harness {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Log::default();
    tokio::spawn(mock_server::run_with_log(listener, log.clone()));

    let prefix_url = format!("http://{addr}/api/v2");
    let options = configure(ClientOptions::new().prefix_url(prefix_url.clone()));
    let clickup = Clickup::with_options(TOKEN, options).unwrap();
    Harness {
        clickup,
        log,
        prefix_url,
    }
}

/// Decodes the mock's echo and checks method and path below `/api/v2/`.
pub fn echoed(
    result: clickup_core::Result<Value>,
    method: &str,
    endpoint: &str,
) -> RecordedRequest {
    let value = result.unwrap_or_else(|e| panic!("{method} {endpoint} failed: {e}"));
    let recorded: RecordedRequest = serde_json::from_value(value).unwrap();
    assert_eq!(recorded.method, method, "method of {endpoint}");
    assert_eq!(recorded.path, format!("/api/v2/{endpoint}"));
    recorded
}

pub fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
