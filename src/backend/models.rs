use serde::Deserialize;

// property
//  ├── id
//  ├── type
//  ├── size / sizeUnit
//  ├── location
//  ├── price          (preformatted currency text, e.g. "$45,000")
//  ├── coordinates
//  │    ├── lat
//  │    └── lng
//  └── images[]

/// A listing exactly as the backend sends it. Every field is optional here;
/// `PropertyRecord::from_raw` decides what is actually required.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "sizeUnit")]
    pub size_unit: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub coordinates: Option<RawCoordinates>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCoordinates {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Response body of the transfer endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransferResponse {
    pub success: Option<bool>,
    #[serde(rename = "transactionId")]
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}
