use crate::backend::BackendClient;
use crate::domain::{Coordinates, PropertyRecord, PropertyStatus};
use crate::store::PropertyStore;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Backend client pointed at a port nothing listens on. Tests only exercise
/// routes that fail before any network call would happen.
pub fn offline_backend() -> BackendClient {
    BackendClient::new("http://127.0.0.1:9/api").expect("client config is static")
}

pub fn record(
    id: &str,
    property_type: &str,
    location: &str,
    lat: f64,
    lng: f64,
) -> PropertyRecord {
    PropertyRecord {
        id: id.to_string(),
        property_type: property_type.to_string(),
        size: "2".to_string(),
        size_unit: "acre".to_string(),
        location: location.to_string(),
        price: "$45,000".to_string(),
        coordinates: Coordinates { lat, lng },
        images: Vec::new(),
        status: PropertyStatus::Listed,
    }
}

/// A small store with one plot, one farm and one beachfront lot.
pub fn seeded_store() -> PropertyStore {
    PropertyStore::with_records(vec![
        record("p1", "Residential Plot", "Rio Rancho, NM", 35.2334, -106.6645),
        record("p2", "Agricultural Land", "Los Lunas, NM", 34.8065, -106.7336),
        record("p3", "Beachfront Lot", "Corpus Christi, TX", 27.8006, -97.3964),
    ])
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(json.as_bytes().to_vec()))
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
