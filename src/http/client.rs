use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::http::error::{internal_error, invalid_url, network_error, parse_error, HttpResult};

/// Issues `GET` requests against the demo backend and parses the body as JSON.
///
/// The body is parsed whatever the response status: the backend reports failures as JSON
/// `{"error": ...}` payloads alongside 4xx/5xx statuses and callers inspect that field.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait HttpClient: Send + Sync {
    async fn get_json(&self, path: &str) -> HttpResult<Value>;
}

/// [`HttpClient`] built on `reqwest`; relative paths are resolved against `base_url`.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
}

impl ReqwestHttpClient {
    pub fn new(base_url: &str) -> HttpResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| invalid_url(format!("invalid base URL '{base_url}': {err}")))?;
        let client = Client::builder()
            .build()
            .map_err(|err| internal_error(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, base_url })
    }

    fn resolve(&self, path: &str) -> HttpResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| invalid_url(format!("cannot resolve '{path}' against {}: {err}", self.base_url)))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpClient for ReqwestHttpClient {
    async fn get_json(&self, path: &str) -> HttpResult<Value> {
        let url = self.resolve(path)?;
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| network_error(format!("failed to fetch {url}: {err}")))?;

        let status = response.status();
        log::debug!("GET {url} -> {status}");

        let body = response
            .text()
            .await
            .map_err(|err| network_error(format!("failed to read response body from {url}: {err}")))?;

        serde_json::from_str(&body)
            .map_err(|err| parse_error(format!("invalid JSON from {url} (status {status}): {err}")))
    }
}
