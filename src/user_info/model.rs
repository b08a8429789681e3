use serde::Deserialize;
use serde_json::{Number, Value};

use crate::user_info::error::{UserInfoError, UserInfoResult};
use crate::user_info::formatters::parse_integer_prefix;
use crate::util::{display_value, is_truthy, null_as_default};

/// Body of `/api/user-info`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserInfoResponse {
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Channel payload kept raw: a summary object, an `{error}` marker, or nothing.
    #[serde(default)]
    pub youtube: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl UserInfoResponse {
    pub fn from_value(value: Value) -> UserInfoResult<Self> {
        serde_json::from_value(value).map_err(|err| UserInfoError::InvalidResponse {
            message: err.to_string(),
        })
    }

    /// The backend's error message when the `error` field is set to a truthy value.
    pub fn backend_error(&self) -> Option<String> {
        self.error
            .as_ref()
            .filter(|value| is_truthy(value))
            .map(display_value)
    }

    pub fn channel(&self) -> ChannelLookup {
        ChannelLookup::from_payload(self.youtube.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "picture", default, deserialize_with = "null_as_default")]
    pub picture_url: String,
    #[serde(rename = "verified_email", default, deserialize_with = "null_as_default")]
    pub email_verified: bool,
}

/// A channel statistic as sent by the backend: the video platform reports counts as decimal
/// strings, but plain numbers are accepted as well.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(Number),
    Text(String),
}

impl Count {
    /// Integer value of the statistic: numbers truncate toward zero, strings yield their leading
    /// integer. `None` when nothing integral can be read.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Count::Number(number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.is_finite() && value.abs() < i64::MAX as f64)
                    .map(|value| value.trunc() as i64)
            }),
            Count::Text(text) => parse_integer_prefix(text),
        }
    }

    /// The coerced value as JSON, `null` when coercion fails.
    pub fn to_json(&self) -> Value {
        self.to_integer().map(Value::from).unwrap_or(Value::Null)
    }
}

impl From<&str> for Count {
    fn from(value: &str) -> Self {
        Count::Text(value.to_string())
    }
}

impl From<i64> for Count {
    fn from(value: i64) -> Self {
        Count::Number(value.into())
    }
}

/// Summary of the video-platform channel linked to the signed-in account.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub channel_id: String,
    pub channel_title: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    pub subscriber_count: Count,
    pub video_count: Count,
    pub view_count: Count,
    #[serde(rename = "publishedAt")]
    pub created_at: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Whether a channel summary is available. Absence is an ordinary outcome, not a failure.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelLookup {
    Found(ChannelSummary),
    Unavailable { reason: Option<String> },
}

impl ChannelLookup {
    fn from_payload(payload: Option<&Value>) -> Self {
        let Some(payload) = payload.filter(|value| !value.is_null()) else {
            return ChannelLookup::Unavailable { reason: None };
        };

        if let Some(error) = payload.get("error").filter(|value| is_truthy(value)) {
            return ChannelLookup::Unavailable {
                reason: Some(display_value(error)),
            };
        }

        match ChannelSummary::deserialize(payload) {
            Ok(summary) => ChannelLookup::Found(summary),
            Err(err) => {
                log::warn!("Ignoring malformed channel summary: {err}");
                ChannelLookup::Unavailable {
                    reason: Some(format!("malformed channel summary: {err}")),
                }
            }
        }
    }
}
