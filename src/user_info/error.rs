use std::fmt;

use crate::dom::DomError;
use crate::http::HttpError;

/// Reasons the signed-in profile could not be shown.
#[derive(Clone, Debug)]
pub enum UserInfoError {
    Fetch(HttpError),
    InvalidResponse { message: String },
    /// The backend answered with an explicit `error` field.
    Backend { message: String },
    MissingProfile,
    Dom(DomError),
}

pub type UserInfoResult<T> = Result<T, UserInfoError>;

impl UserInfoError {
    /// Message reported in the `error` analytics event; backend messages pass through verbatim.
    pub fn event_message(&self) -> String {
        match self {
            UserInfoError::Backend { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for UserInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserInfoError::Fetch(err) => write!(f, "Failed to fetch user info: {err}"),
            UserInfoError::InvalidResponse { message } => {
                write!(f, "Invalid user info response: {message}")
            }
            UserInfoError::Backend { message } => write!(f, "User info request failed: {message}"),
            UserInfoError::MissingProfile => f.write_str("User info response has no user profile"),
            UserInfoError::Dom(err) => write!(f, "Failed to render user info: {err}"),
        }
    }
}

impl std::error::Error for UserInfoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UserInfoError::Fetch(err) => Some(err),
            UserInfoError::Dom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HttpError> for UserInfoError {
    fn from(err: HttpError) -> Self {
        UserInfoError::Fetch(err)
    }
}

impl From<DomError> for UserInfoError {
    fn from(err: DomError) -> Self {
        UserInfoError::Dom(err)
    }
}
