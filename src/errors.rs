use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad query params, etc.) or downstream layers (listings backend).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    BackendError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            ServerError::BackendError(msg) => write!(f, "Backend Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<crate::backend::BackendError> for ServerError {
    fn from(err: crate::backend::BackendError) -> Self {
        ServerError::BackendError(err.to_string())
    }
}
