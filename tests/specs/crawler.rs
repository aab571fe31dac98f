//! Crawler specs
//!
//! Verify the "stopped discovering means done" estimate.

use crate::prelude::*;

#[tokio::test]
async fn crawl_done_once_discovery_stops() {
    let suite = Suite::new().include(BASE).await;
    suite.control.spider(BASE).await.unwrap();

    suite.engine.add_site_entry(captured("https://shop.example.com/store/a"));
    assert!(suite.crawl_percent().await < 100);
    assert_eq!(suite.crawl_percent().await, 100);
}

#[tokio::test]
async fn crawl_waits_out_the_stability_window() {
    let suite = Suite::with_window(3000).include(BASE).await;
    suite.control.spider(BASE).await.unwrap();
    suite.engine.add_site_entry(captured("https://shop.example.com/store/a"));
    assert_eq!(suite.crawl_percent().await, 50);

    suite.clock.advance(Duration::from_millis(1500));
    assert_eq!(suite.crawl_percent().await, 50);

    suite.clock.advance(Duration::from_millis(1500));
    assert_eq!(suite.crawl_percent().await, 100);
}

#[tokio::test]
async fn crawl_requires_scope() {
    let suite = Suite::new();

    let err = suite.control.spider(BASE).await.unwrap_err();

    assert!(matches!(err, ControlError::OutOfScope(_)));
    assert!(!suite.called(|c| matches!(c, EngineCall::SendToCrawler { .. })));
}

#[tokio::test]
async fn cleared_crawls_report_complete() {
    let suite = Suite::new().include(BASE).await;
    suite.control.spider(BASE).await.unwrap();
    suite.engine.add_site_entry(captured("https://shop.example.com/store/a"));

    suite.control.clear_crawls();

    similar_asserts::assert_eq!(
        serde_json::to_value(suite.control.spider_status().await.unwrap()).unwrap(),
        serde_json::json!({ "totalCrawlPercentage": 100 })
    );
}
