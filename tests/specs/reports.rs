//! Report and query specs
//!
//! Verify prefix filtering, report generation, and configuration access.

use crate::prelude::*;

async fn with_issues() -> Suite {
    let suite = Suite::new();
    suite
        .engine
        .add_issue(issue("https://shop.example.com/store/cart", "SQL injection"));
    suite
        .engine
        .add_issue(issue("https://shop.example.com/Store/help", "Reflected XSS"));
    suite
}

#[tokio::test]
async fn issue_filter_is_a_case_sensitive_prefix() {
    let suite = with_issues().await;

    let names: Vec<String> = suite
        .control
        .scan_issues(Some(BASE))
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();

    similar_asserts::assert_eq!(names, vec!["SQL injection".to_string()]);
}

#[tokio::test]
async fn report_bytes_cover_filtered_issues() {
    let dir = tempfile::tempdir().unwrap();
    let suite = with_issues().await;
    let control = ScanControl::with_clock(
        TracedEngine::new(suite.engine.clone()),
        ControlConfig {
            report_dir: Some(dir.path().to_path_buf()),
            ..ControlConfig::default()
        },
        FakeClock::new(),
    );

    let report = control.report(Some(BASE), Some("XML")).await.unwrap();

    similar_asserts::assert_eq!(
        String::from_utf8(report).unwrap(),
        "XML report: 1 issues\nMedium SQL injection https://shop.example.com/store/cart\n"
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn unknown_report_format_is_rejected() {
    let suite = with_issues().await;

    let err = suite.control.report(None, Some("pdf")).await.unwrap_err();

    assert!(matches!(err, ControlError::InvalidInput(_)));
}

#[tokio::test]
async fn configuration_round_trips_through_the_engine() {
    let suite = Suite::new();

    suite
        .control
        .update_configuration(r#"{"proxy":{"intercept_client_requests":{"do_intercept":true}}}"#)
        .await
        .unwrap();

    similar_asserts::assert_eq!(
        suite
            .control
            .configuration(Some("proxy.intercept_client_requests"))
            .await
            .unwrap(),
        serde_json::json!({
            "proxy": { "intercept_client_requests": { "do_intercept": true } }
        })
    );
}

#[tokio::test]
async fn versions_name_engine_and_extension() {
    let suite = Suite::new();

    let versions = suite.control.versions().await.unwrap();

    similar_asserts::assert_eq!(
        serde_json::to_value(versions).unwrap(),
        serde_json::json!({
            "engineVersion": "2023.10.1",
            "extensionVersion": "0.1.0"
        })
    );
}
