// src/tests/router_tests/search_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, offline_backend, read_body, seeded_store};
use serde_json::Value;

fn search(uri: &str) -> Vec<Value> {
    let store = seeded_store();
    let backend = offline_backend();

    let resp = handle(get(uri), &store, &backend).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    serde_json::from_str::<Vec<Value>>(&read_body(resp)).expect("body is a JSON array")
}

fn ids(results: &[Value]) -> Vec<&str> {
    results.iter().map(|r| r["id"].as_str().unwrap()).collect()
}

#[test]
fn home_page_shows_property_count() {
    let store = seeded_store();
    let backend = offline_backend();

    let resp = handle(get("/"), &store, &backend).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("3 properties loaded."));
}

#[test]
fn search_without_params_returns_everything_in_order() {
    let results = search("/api/properties");
    assert_eq!(ids(&results), vec!["p1", "p2", "p3"]);
}

#[test]
fn search_filters_by_category() {
    let results = search("/api/properties?category=5");
    assert_eq!(ids(&results), vec!["p2"]);

    // Unknown category ids behave like Recent.
    let results = search("/api/properties?category=42");
    assert_eq!(ids(&results), vec!["p1", "p2", "p3"]);
}

#[test]
fn search_filters_by_free_text() {
    let results = search("/api/properties?q=beachfront");
    assert_eq!(ids(&results), vec!["p3"]);

    // '+' decodes to a space.
    let results = search("/api/properties?q=rio+rancho");
    assert_eq!(ids(&results), vec!["p1"]);

    // So do %XX escapes, including at the end of the value.
    let results = search("/api/properties?q=Rio%20Rancho%2C%20NM");
    assert_eq!(ids(&results), vec!["p1"]);
    let results = search("/api/properties?q=rancho%2C");
    assert_eq!(ids(&results), vec!["p1"]);
}

#[test]
fn search_accepts_inline_coordinates_in_query() {
    // p1 and p2 are within 50 miles of this point; p3 is on the Texas coast.
    let results = search("/api/properties?q=35.2334,-106.6645");
    assert_eq!(ids(&results), vec!["p1", "p2"]);
}

#[test]
fn search_with_explicit_coordinate_params() {
    let results = search("/api/properties?lat=35.2334&lng=-106.6645&radius=10");
    assert_eq!(ids(&results), vec!["p1"]);

    let results = search("/api/properties?lat=35.2334&lng=-106.6645&radius=0");
    assert_eq!(ids(&results), vec!["p1"]);
}

#[test]
fn search_rejects_partial_coordinate_params() {
    let store = seeded_store();
    let backend = offline_backend();

    let err = handle(get("/api/properties?lat=35.0"), &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn search_rejects_malformed_coordinate_params() {
    let store = seeded_store();
    let backend = offline_backend();

    for uri in [
        "/api/properties?lat=abc&lng=-106.0&radius=10",
        "/api/properties?lat=35.0&lng=-106.0&radius=-5",
        "/api/properties?lat=NaN&lng=-106.0&radius=10",
    ] {
        let err = handle(get(uri), &store, &backend).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)), "uri: {uri}");
    }
}

#[test]
fn single_property_lookup() {
    let store = seeded_store();
    let backend = offline_backend();

    let resp = handle(get("/api/properties/p2"), &store, &backend).unwrap();
    let body: Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(body["id"], "p2");
    assert_eq!(body["type"].as_str(), None); // serialized field is property_type
    assert_eq!(body["property_type"], "Agricultural Land");

    let err = handle(get("/api/properties/missing"), &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let store = seeded_store();
    let backend = offline_backend();

    let err = handle(get("/nope"), &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
