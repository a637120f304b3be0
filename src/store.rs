// src/store.rs

use crate::backend::models::RawProperty;
use crate::backend::{BackendClient, BackendError};
use crate::domain::{PropertyRecord, PropertyStatus};
use chrono::NaiveDateTime;
use std::sync::RwLock;

/// The single in-memory listing collection, shared across server workers.
///
/// The filter engine never sees this type; handlers take a `snapshot()` and
/// run the pure filter over it. Reload replaces the whole list atomically and
/// only on success, so a failed fetch leaves the previous results untouched.
pub struct PropertyStore {
    properties: RwLock<Vec<PropertyRecord>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self {
            properties: RwLock::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn with_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            properties: RwLock::new(records),
        }
    }

    /// An owned copy of the current list, in backend order.
    pub fn snapshot(&self) -> Vec<PropertyRecord> {
        self.properties.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.properties.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Fetches the full list from the backend and swaps it in. Fail closed:
    /// any fetch error propagates and the held list stays as it was.
    /// Individual malformed records are skipped with a warning rather than
    /// failing the whole load.
    pub fn reload(&self, backend: &BackendClient) -> Result<ReloadSummary, BackendError> {
        let raw = backend.fetch_properties()?;
        let summary = self.replace_with_raw(&raw);
        println!(
            "✅ Loaded {} properties ({} rejected)",
            summary.loaded, summary.rejected
        );
        Ok(summary)
    }

    /// Validates raw records and replaces the held list with the good ones.
    pub fn replace_with_raw(&self, raw: &[RawProperty]) -> ReloadSummary {
        let mut loaded = Vec::with_capacity(raw.len());
        let mut rejected = 0;

        for item in raw {
            match PropertyRecord::from_raw(item) {
                Ok(record) => loaded.push(record),
                Err(reason) => {
                    rejected += 1;
                    eprintln!("Skipping bad property record: {reason}");
                }
            }
        }

        let summary = ReloadSummary {
            loaded: loaded.len(),
            rejected,
        };

        let mut guard = self.properties.write().unwrap_or_else(|e| e.into_inner());
        *guard = loaded;
        summary
    }

    /// Marks one property as transferred. Called only after the backend has
    /// confirmed the transfer; any error here means local state was not
    /// touched.
    pub fn mark_transferred(
        &self,
        property_id: &str,
        transaction_id: &str,
        at: NaiveDateTime,
    ) -> Result<PropertyRecord, String> {
        let mut guard = self.properties.write().unwrap_or_else(|e| e.into_inner());

        let record = guard
            .iter_mut()
            .find(|r| r.id == property_id)
            .ok_or_else(|| format!("Unknown property: {property_id}"))?;

        if record.is_transferred() {
            return Err(format!("Property {property_id} is already transferred"));
        }

        record.status = PropertyStatus::Transferred {
            transaction_id: transaction_id.to_string(),
            at,
        };
        Ok(record.clone())
    }

    /// Looks up a single record by id.
    pub fn get(&self, property_id: &str) -> Option<PropertyRecord> {
        self.properties
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|r| r.id == property_id)
            .cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSummary {
    pub loaded: usize,
    pub rejected: usize,
}
