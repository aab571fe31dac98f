//! Scope specs
//!
//! Verify scope toggling and the errors callers see for bad input.

use crate::prelude::*;

#[tokio::test]
async fn scope_toggles_round_trip() {
    let suite = Suite::new();
    let url = "https://shop.example.com/";

    assert!(!suite.control.is_in_scope(url).await.unwrap());
    suite.control.include_in_scope(url).await.unwrap();
    assert!(suite.control.is_in_scope(url).await.unwrap());
    suite.control.exclude_from_scope(url).await.unwrap();
    assert!(!suite.control.is_in_scope(url).await.unwrap());
}

#[tokio::test]
async fn exclusion_carves_out_a_sub_path() {
    let suite = Suite::new()
        .include("https://shop.example.com/")
        .await
        .exclude("https://shop.example.com/admin")
        .await;

    assert!(suite
        .control
        .is_in_scope("https://shop.example.com/store")
        .await
        .unwrap());
    assert!(!suite
        .control
        .is_in_scope("https://shop.example.com/admin/users")
        .await
        .unwrap());
}

#[tokio::test]
async fn malformed_url_is_invalid_input_not_out_of_scope() {
    let suite = Suite::new();

    let err = suite.control.is_in_scope("shop.example.com").await.unwrap_err();

    assert!(matches!(err, ControlError::InvalidInput(_)));
    assert!(suite.engine.calls().is_empty());
}

#[tokio::test]
async fn engine_outage_is_reported_not_retried() {
    let suite = Suite::new();
    suite.engine.set_unavailable(true);

    let err = suite.control.is_in_scope(BASE).await.unwrap_err();

    assert!(matches!(err, ControlError::EngineUnavailable(_)));
    similar_asserts::assert_eq!(
        suite.engine.calls(),
        vec![EngineCall::IsInScope {
            url: BASE.to_string()
        }]
    );
}
