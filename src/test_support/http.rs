use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::http::error::{network_error, parse_error};
use crate::http::{HttpClient, HttpResult};

/// Start a fresh `httpmock::MockServer` for tests that exercise the real reqwest client.
#[cfg(not(target_arch = "wasm32"))]
pub async fn start_mock_server() -> httpmock::MockServer {
    httpmock::MockServer::start_async().await
}

#[derive(Clone, Debug)]
enum StubResponse {
    Json(Value),
    InvalidJson,
    NetworkError,
}

/// Canned [`HttpClient`] keyed by request path. Unknown paths fail like an unreachable host.
#[derive(Debug, Default)]
pub struct StubHttpClient {
    responses: HashMap<String, StubResponse>,
    requests: Mutex<Vec<String>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), StubResponse::Json(body));
        self
    }

    pub fn with_invalid_json(mut self, path: &str) -> Self {
        self.responses.insert(path.to_string(), StubResponse::InvalidJson);
        self
    }

    pub fn with_network_error(mut self, path: &str) -> Self {
        self.responses.insert(path.to_string(), StubResponse::NetworkError);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpClient for StubHttpClient {
    async fn get_json(&self, path: &str) -> HttpResult<Value> {
        self.requests.lock().unwrap().push(path.to_string());
        match self.responses.get(path) {
            Some(StubResponse::Json(body)) => Ok(body.clone()),
            Some(StubResponse::InvalidJson) => {
                Err(parse_error(format!("invalid JSON from {path}: expected value at line 1 column 1")))
            }
            Some(StubResponse::NetworkError) | None => Err(network_error(format!("failed to fetch {path}"))),
        }
    }
}
