use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BackendError {
    Network(String),
    Status(u16, String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "Network error: {msg}"),
            BackendError::Status(code, msg) => write!(f, "Backend returned {code}: {msg}"),
            BackendError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            BackendError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for BackendError {}
