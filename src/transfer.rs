// src/transfer.rs

use crate::backend::BackendClient;
use crate::errors::ServerError;
use crate::store::PropertyStore;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ownership transfer as submitted by the owner flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "propertyId")]
    pub property_id: String,
    #[serde(rename = "recipientEmail")]
    pub recipient_email: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Optional reference to a single supporting document (deed scan etc.).
    #[serde(default)]
    pub document: Option<String>,
}

impl TransferRequest {
    /// Checks the fields the backend call depends on. Runs before any
    /// network traffic so an obviously bad request never leaves the process.
    pub fn validate(&self) -> Result<(), String> {
        if self.property_id.trim().is_empty() {
            return Err("Property id is required".to_string());
        }
        let recipient = self.recipient_email.trim();
        if recipient.is_empty() {
            return Err("Recipient email is required".to_string());
        }
        if !recipient.contains('@') {
            return Err(format!("'{recipient}' is not an email address"));
        }
        Ok(())
    }
}

/// What the caller gets back once a transfer has gone through end to end.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    #[serde(rename = "propertyId")]
    pub property_id: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
    pub at: NaiveDateTime,
}

/// Runs the full transfer workflow: local preconditions, backend call, then
/// the local status flip. Local state is mutated only after the backend has
/// confirmed success; every failure path leaves the store exactly as it was.
pub fn execute_transfer(
    store: &PropertyStore,
    backend: &BackendClient,
    request: &TransferRequest,
) -> Result<TransferReceipt, ServerError> {
    request.validate().map_err(ServerError::BadRequest)?;

    let property = store
        .get(&request.property_id)
        .ok_or(ServerError::NotFound)?;
    if property.is_transferred() {
        return Err(ServerError::Conflict(format!(
            "Property {} has already been transferred",
            property.id
        )));
    }

    let response = backend.submit_transfer(request)?;

    if response.success != Some(true) {
        let msg = response
            .message
            .unwrap_or_else(|| "Transfer was rejected by the backend".to_string());
        return Err(ServerError::BackendError(msg));
    }
    let transaction_id = response
        .transaction_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            ServerError::BackendError("Transfer succeeded without a transaction id".to_string())
        })?;

    commit_transfer(store, &property.id, &transaction_id)
}

/// Applies a backend-confirmed transfer to the local list.
///
/// The precondition check in `execute_transfer` runs before the network call
/// and outside the store's write lock, so a concurrent transfer of the same
/// property can slip in between. `mark_transferred` re-checks under the lock;
/// when it loses that race the backend has still confirmed this transfer, so
/// the conflict message says so instead of reporting a bare failure.
fn commit_transfer(
    store: &PropertyStore,
    property_id: &str,
    transaction_id: &str,
) -> Result<TransferReceipt, ServerError> {
    let at = Utc::now().naive_utc();
    let updated = store
        .mark_transferred(property_id, transaction_id, at)
        .map_err(|reason| {
            ServerError::Conflict(format!(
                "Transfer {transaction_id} was confirmed by the backend, \
                 but local state changed underneath it: {reason}"
            ))
        })?;

    println!("✅ Property {} transferred ({transaction_id})", updated.id);

    Ok(TransferReceipt {
        property_id: updated.id,
        transaction_id: transaction_id.to_string(),
        at,
    })
}
