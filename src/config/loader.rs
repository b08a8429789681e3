use std::sync::Arc;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::types::Configuration;
use crate::http::HttpClient;

/// Fetches the runtime [`Configuration`] from the backend.
///
/// Each call issues a new request; nothing is cached between calls.
#[derive(Clone)]
pub struct ConfigLoader {
    http: Arc<dyn HttpClient>,
    endpoint: String,
}

impl ConfigLoader {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Loads the configuration, logging any failure and reporting it as `None`.
    pub async fn load_config(&self) -> Option<Configuration> {
        match self.fetch().await {
            Ok(config) => {
                let missing = config.firebase.missing_required_fields();
                if !missing.is_empty() {
                    log::warn!("Configuration is missing required settings: {}", missing.join(", "));
                }
                Some(config)
            }
            Err(err) => {
                log::error!("Error loading configuration: {err}");
                None
            }
        }
    }

    /// Loads the configuration, surfacing the failure.
    pub async fn fetch(&self) -> ConfigResult<Configuration> {
        let value = self.http.get_json(&self.endpoint).await?;
        if !value.is_object() {
            return Err(ConfigError::InvalidShape {
                message: format!("expected a JSON object, got {value}"),
            });
        }
        serde_json::from_value(value).map_err(|err| ConfigError::InvalidShape {
            message: err.to_string(),
        })
    }
}
