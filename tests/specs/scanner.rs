//! Scanner specs
//!
//! Verify scope-filtered dispatch and aggregate scan progress.

use crate::prelude::*;

#[tokio::test]
async fn scan_submits_only_eligible_targets() {
    let suite = Suite::new()
        .include(BASE)
        .await
        .exclude("https://shop.example.com/store/c")
        .await
        .site(&[
            "https://shop.example.com/store/a",
            "https://shop.example.com/store/c",
        ])
        .unanswered(&["https://shop.example.com/store/b"]);

    let summary = suite.control.scan_active(BASE).await.unwrap();

    assert_eq!(summary.submitted, 1);
    similar_asserts::assert_eq!(
        suite.active_requests(),
        vec!["https://shop.example.com/store/a".to_string()]
    );
}

#[tokio::test]
async fn out_of_scope_base_reads_no_site_map() {
    let suite = Suite::new().site(&["https://shop.example.com/store/a"]);

    let err = suite.control.scan_active(BASE).await.unwrap_err();

    assert!(matches!(err, ControlError::OutOfScope(_)));
    assert!(err.to_string().contains("include it in scope"));
    assert!(!suite.called(|c| matches!(c, EngineCall::SiteMap { .. })));
}

#[tokio::test]
async fn idle_scanner_reports_complete() {
    let suite = Suite::new();
    assert_eq!(suite.scan_percent().await, 100);
}

#[tokio::test]
async fn progress_is_mean_of_tracked_scans() {
    let suite = Suite::new()
        .include(BASE)
        .await
        .site(&["https://shop.example.com/store/a"]);
    suite.engine.set_initial_progress(40);
    suite.control.scan_active(BASE).await.unwrap();
    assert_eq!(suite.scan_percent().await, 40);

    let suite = suite.site(&["https://shop.example.com/store/b"]);
    suite.engine.set_initial_progress(100);
    // Narrower base leaves the ticket for /a in place
    suite
        .control
        .scan_active("https://shop.example.com/store/b")
        .await
        .unwrap();
    assert_eq!(suite.scan_percent().await, 70);
}

#[tokio::test]
async fn rescan_replaces_rather_than_duplicates() {
    let suite = Suite::new()
        .include(BASE)
        .await
        .site(&["https://shop.example.com/store/a"]);
    suite.engine.set_initial_progress(100);
    suite.control.scan_active(BASE).await.unwrap();

    suite.engine.set_initial_progress(10);
    suite.control.scan_active(BASE).await.unwrap();

    assert_eq!(suite.engine.tickets().len(), 2);
    assert_eq!(suite.scan_percent().await, 10);
}

#[tokio::test]
async fn clearing_forgets_running_scans() {
    let suite = Suite::new()
        .include(BASE)
        .await
        .site(&["https://shop.example.com/store/a"]);
    suite.control.scan_active(BASE).await.unwrap();
    assert_eq!(suite.scan_percent().await, 0);

    suite.control.clear_scans();

    assert_eq!(suite.scan_percent().await, 100);
}

#[tokio::test]
async fn status_serializes_in_camel_case() {
    let suite = Suite::new();

    let status = suite.control.scan_status().await.unwrap();

    similar_asserts::assert_eq!(
        serde_json::to_value(status).unwrap(),
        serde_json::json!({ "totalScanPercentage": 100 })
    );
}
