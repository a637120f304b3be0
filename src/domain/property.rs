// src/domain/property.rs

use crate::backend::models::RawProperty;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// True when both components are finite and inside the valid degree
    /// ranges. The backend does not enforce this, so we do at ingest.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Local lifecycle of a listing. Everything arrives `Listed`; a successful
/// ownership transfer moves it to `Transferred` and it never comes back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PropertyStatus {
    Listed,
    Transferred {
        transaction_id: String,
        at: NaiveDateTime,
    },
}

/// A property listing as validated and normalized from the backend payload,
/// ready for the filter engine. This acts as an anti-corruption layer between
/// the raw wire shape and the rest of the app.
///
/// `size` stays a string on purpose: the backend sends informal free text
/// ("2", "0.5") next to a free-text `size_unit`, and the pair is never a
/// normalized measurement. Filters parse it on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: String,
    pub property_type: String,
    pub size: String,
    pub size_unit: String,
    pub location: String,
    pub price: String,
    pub coordinates: Coordinates,
    pub images: Vec<String>,
    pub status: PropertyStatus,
}

impl PropertyRecord {
    /// Creates a clean `PropertyRecord` from the raw backend model.
    /// It validates that the fields the filter engine relies on exist and
    /// that coordinates are in range; a bad record is a data error reported
    /// to the caller, never a panic later in the filter pass.
    pub fn from_raw(raw: &RawProperty) -> Result<Self, String> {
        let id = raw
            .id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty property id")?
            .to_string();

        let coordinate = raw.coordinates.as_ref().ok_or("Missing coordinates")?;
        let lat = coordinate.lat.ok_or("Missing coordinate lat")?;
        let lng = coordinate.lng.ok_or("Missing coordinate lng")?;

        let coordinates = Coordinates { lat, lng };
        if !coordinates.is_valid() {
            return Err(format!("Coordinates out of range: {lat},{lng}"));
        }

        Ok(PropertyRecord {
            id,
            property_type: raw.property_type.clone().unwrap_or_default(),
            size: raw.size.clone().unwrap_or_default(),
            size_unit: raw.size_unit.clone().unwrap_or_default(),
            location: raw.location.clone().unwrap_or_default(),
            price: raw.price.clone().unwrap_or_default(),
            coordinates,
            images: raw.images.clone().unwrap_or_default(),
            status: PropertyStatus::Listed,
        })
    }

    pub fn is_transferred(&self) -> bool {
        matches!(self.status, PropertyStatus::Transferred { .. })
    }
}
