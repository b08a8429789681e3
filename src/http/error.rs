use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpErrorCode {
    InvalidUrl,
    Network,
    Parse,
    Internal,
}

impl HttpErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpErrorCode::InvalidUrl => "http/invalid-url",
            HttpErrorCode::Network => "http/network",
            HttpErrorCode::Parse => "http/parse",
            HttpErrorCode::Internal => "http/internal",
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpError {
    pub code: HttpErrorCode,
    message: String,
}

impl HttpError {
    pub fn new(code: HttpErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for HttpError {}

pub type HttpResult<T> = Result<T, HttpError>;

pub fn invalid_url(message: impl Into<String>) -> HttpError {
    HttpError::new(HttpErrorCode::InvalidUrl, message)
}

pub fn network_error(message: impl Into<String>) -> HttpError {
    HttpError::new(HttpErrorCode::Network, message)
}

pub fn parse_error(message: impl Into<String>) -> HttpError {
    HttpError::new(HttpErrorCode::Parse, message)
}

pub fn internal_error(message: impl Into<String>) -> HttpError {
    HttpError::new(HttpErrorCode::Internal, message)
}
