// src/tests/router_tests/transfer_tests.rs
//
// Transfers need a confirming backend before any local mutation, so these
// tests cover the paths that fail before the network call: body parsing,
// request validation and local preconditions. The store must be untouched
// after every one of them.

use crate::errors::ServerError;
use crate::router::handle;
use crate::store::PropertyStore;
use crate::tests::utils::{offline_backend, post_json, record, seeded_store};
use chrono::NaiveDate;

fn assert_untouched(store: &PropertyStore) {
    for record in store.snapshot() {
        assert!(!record.is_transferred(), "store was mutated");
    }
}

#[test]
fn transfer_rejects_malformed_body() {
    let store = seeded_store();
    let backend = offline_backend();

    let req = post_json("/api/transfers", "{not json");
    let err = handle(req, &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_untouched(&store);
}

#[test]
fn transfer_rejects_missing_recipient() {
    let store = seeded_store();
    let backend = offline_backend();

    let req = post_json(
        "/api/transfers",
        r#"{"propertyId":"p1","recipientEmail":""}"#,
    );
    let err = handle(req, &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_untouched(&store);
}

#[test]
fn transfer_rejects_implausible_email() {
    let store = seeded_store();
    let backend = offline_backend();

    let req = post_json(
        "/api/transfers",
        r#"{"propertyId":"p1","recipientEmail":"no-at-sign"}"#,
    );
    let err = handle(req, &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_untouched(&store);
}

#[test]
fn transfer_rejects_unknown_property() {
    let store = seeded_store();
    let backend = offline_backend();

    let req = post_json(
        "/api/transfers",
        r#"{"propertyId":"missing","recipientEmail":"buyer@example.com"}"#,
    );
    let err = handle(req, &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_untouched(&store);
}

#[test]
fn transfer_rejects_already_transferred_property() {
    let store = PropertyStore::with_records(vec![record(
        "p1",
        "Residential Plot",
        "Rio Rancho, NM",
        35.2334,
        -106.6645,
    )]);
    let at = NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    store.mark_transferred("p1", "tx-1", at).unwrap();
    let backend = offline_backend();

    let req = post_json(
        "/api/transfers",
        r#"{"propertyId":"p1","recipientEmail":"buyer@example.com"}"#,
    );
    let err = handle(req, &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::Conflict(_)));

    // Still carries the original transaction.
    let held = store.get("p1").unwrap();
    assert!(held.is_transferred());
}

#[test]
fn transfer_with_unreachable_backend_does_not_mutate() {
    // Valid request, live preconditions; the backend call itself fails
    // (nothing listens on the offline port) and the store must stay as-is.
    let store = seeded_store();
    let backend = offline_backend();

    let req = post_json(
        "/api/transfers",
        r#"{"propertyId":"p1","recipientEmail":"buyer@example.com"}"#,
    );
    let err = handle(req, &store, &backend).unwrap_err();
    assert!(matches!(err, ServerError::BackendError(_)));
    assert_untouched(&store);
}
