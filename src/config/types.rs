use serde::{Deserialize, Serialize};

use crate::util::{lenient_or_default, string_or_none};

/// Configuration returned by `/api/config`, loaded once per page load.
///
/// Missing or misshapen sections deserialize to their defaults and non-string settings read as
/// absent. A missing measurement ID is not a parse failure and only puts analytics into its
/// disabled state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Web SDK settings of the auth project.
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub firebase: FirebaseWebConfig,
    #[serde(rename = "ga4", default, deserialize_with = "lenient_or_default")]
    pub analytics: Ga4Config,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub oauth: Option<OAuthConfig>,
}

impl Configuration {
    pub fn measurement_id(&self) -> Option<&str> {
        self.analytics.measurement_id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    #[serde(default, deserialize_with = "string_or_none")]
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub auth_domain: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub storage_bucket: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub app_id: Option<String>,
}

impl FirebaseWebConfig {
    /// Settings the backend requires but reported empty.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("apiKey", &self.api_key),
            ("authDomain", &self.auth_domain),
            ("projectId", &self.project_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ga4Config {
    #[serde(default, deserialize_with = "string_or_none")]
    pub measurement_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    #[serde(default, deserialize_with = "string_or_none")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub scopes: Vec<String>,
}
