use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analytics::constants::{DEFAULT_DATA_LAYER_NAME, DEFAULT_GTAG_SCRIPT_URL};
use crate::analytics::AnalyticsSettings;
use crate::config::error::{ConfigError, ConfigResult};
use crate::logger::LogLevel;
use crate::platform::environment::bootstrap_defaults;

/// Endpoints and vendor locations used by the page flows.
///
/// Every field has a default matching the demo backend; overrides are applied field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootstrapSettings {
    pub config_endpoint: String,
    pub user_info_endpoint: String,
    pub auth_redirect: String,
    pub gtag_script_url: String,
    pub data_layer_name: String,
    pub log_level: String,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            config_endpoint: "/api/config".to_string(),
            user_info_endpoint: "/api/user-info".to_string(),
            auth_redirect: "/auth/google".to_string(),
            gtag_script_url: DEFAULT_GTAG_SCRIPT_URL.to_string(),
            data_layer_name: DEFAULT_DATA_LAYER_NAME.to_string(),
            log_level: LogLevel::Info.as_str().to_string(),
        }
    }
}

impl BootstrapSettings {
    /// Defaults overlaid with whatever the environment supplies; unusable overrides are logged
    /// and ignored.
    pub fn from_environment() -> Self {
        match bootstrap_defaults() {
            Some(value) => Self::from_value(value).unwrap_or_else(|err| {
                log::warn!("{err}; using default bootstrap settings");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|err| ConfigError::InvalidSettings {
            message: err.to_string(),
        })
    }

    pub fn analytics_settings(&self) -> AnalyticsSettings {
        AnalyticsSettings {
            script_url: self.gtag_script_url.clone(),
            data_layer_name: self.data_layer_name.clone(),
        }
    }

    /// Parsed `log_level`, falling back to `info` for unknown names.
    pub fn log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to info");
            LogLevel::Info
        })
    }
}
