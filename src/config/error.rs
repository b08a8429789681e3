use std::fmt;

use crate::http::HttpError;

#[derive(Clone, Debug)]
pub enum ConfigError {
    /// The configuration endpoint could not be reached or returned a non-JSON body.
    Fetch(HttpError),
    /// The body was JSON but not a configuration object.
    InvalidShape { message: String },
    /// Bootstrap settings could not be read.
    InvalidSettings { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Fetch(err) => write!(f, "Failed to fetch configuration: {err}"),
            ConfigError::InvalidShape { message } => {
                write!(f, "Invalid configuration response: {message}")
            }
            ConfigError::InvalidSettings { message } => {
                write!(f, "Invalid bootstrap settings: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HttpError> for ConfigError {
    fn from(err: HttpError) -> Self {
        ConfigError::Fetch(err)
    }
}
