use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    /// No element with the requested id exists in the document.
    MissingElement { id: String },
    /// The element exists but is not of the kind the operation needs.
    WrongElementType { id: String, expected: &'static str },
    /// The host window or document could not be reached.
    Unavailable { message: String },
    /// The host rejected the mutation.
    Host { message: String },
}

pub type DomResult<T> = Result<T, DomError>;

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::MissingElement { id } => write!(f, "Element '#{id}' not found"),
            DomError::WrongElementType { id, expected } => {
                write!(f, "Element '#{id}' is not a {expected}")
            }
            DomError::Unavailable { message } => write!(f, "Document unavailable: {message}"),
            DomError::Host { message } => write!(f, "Document operation failed: {message}"),
        }
    }
}

impl std::error::Error for DomError {}

pub fn missing_element(id: impl Into<String>) -> DomError {
    DomError::MissingElement { id: id.into() }
}

pub fn host_error(message: impl Into<String>) -> DomError {
    DomError::Host {
        message: message.into(),
    }
}
