// client.rs
use crate::backend::models::{RawProperty, RawTransferResponse};
use crate::backend::BackendError;
use crate::transfer::TransferRequest;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("landlist/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the listings backend. One request at a time per
/// caller, no retries; a failed call is terminal for that attempt and the
/// user retries by reloading.
pub struct BackendClient {
    client: Client,
    base: Url,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        // Url::join treats a path without a trailing slash as a file, which
        // would drop the last segment of the base.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base = Url::parse(&normalized)
            .map_err(|e| BackendError::UnexpectedShape(format!("Bad base url: {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|e| BackendError::UnexpectedShape(format!("Bad endpoint {path}: {e}")))
    }

    /// Fetches the full flat list of listings.
    pub fn fetch_properties(&self) -> Result<Vec<RawProperty>, BackendError> {
        let url = self.endpoint("properties")?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(BackendError::Status(status.as_u16(), body));
        }

        resp.json::<Vec<RawProperty>>()
            .map_err(|e| BackendError::JsonParse(e.to_string()))
    }

    /// Submits an ownership transfer. The caller decides what a successful
    /// response means for local state.
    pub fn submit_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<RawTransferResponse, BackendError> {
        let url = self.endpoint("transfers")?;

        let resp = self
            .client
            .post(url)
            .json(request)
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(BackendError::Status(status.as_u16(), body));
        }

        resp.json::<RawTransferResponse>()
            .map_err(|e| BackendError::JsonParse(e.to_string()))
    }
}
