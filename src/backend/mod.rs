mod backend_error;
mod client;
pub mod models;

pub use backend_error::BackendError;
pub use client::BackendClient;
