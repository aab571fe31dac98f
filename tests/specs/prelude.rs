//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for scripting an engine and driving the control
//! surface against it.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use sr_adapters::{EngineCall, FakeEngine, TracedEngine};
pub use sr_control::{ControlConfig, ControlError, ScanControl};
pub use sr_core::test_support::{captured, issue, unanswered};
pub use sr_core::FakeClock;
pub use std::time::Duration;

pub const BASE: &str = "https://shop.example.com/store";

pub type Control = ScanControl<TracedEngine<FakeEngine>, FakeClock>;

/// A scripted engine plus the control surface wired to it
pub struct Suite {
    pub engine: FakeEngine,
    pub clock: FakeClock,
    pub control: Control,
}

impl Suite {
    /// Headless suite with the given configuration
    pub fn with_config(config: ControlConfig) -> Self {
        let engine = FakeEngine::new();
        let clock = FakeClock::new();
        let control = ScanControl::with_clock(
            TracedEngine::new(engine.clone()),
            config,
            clock.clone(),
        );
        Self {
            engine,
            clock,
            control,
        }
    }

    /// Suite whose crawls must hold still for `window_ms` before completing
    pub fn with_window(window_ms: u64) -> Self {
        Self::with_config(ControlConfig {
            crawl_window_ms: window_ms,
            ..ControlConfig::default()
        })
    }

    pub fn new() -> Self {
        Self::with_config(ControlConfig::default())
    }

    /// Include `url` in scope, then forget the setup calls
    pub async fn include(self, url: &str) -> Self {
        self.control.include_in_scope(url).await.unwrap();
        self.engine.clear_calls();
        self
    }

    /// Carve `url` out of scope, then forget the setup calls
    pub async fn exclude(self, url: &str) -> Self {
        self.control.exclude_from_scope(url).await.unwrap();
        self.engine.clear_calls();
        self
    }

    pub fn site(self, urls: &[&str]) -> Self {
        for url in urls {
            self.engine.add_site_entry(captured(url));
        }
        self
    }

    pub fn unanswered(self, urls: &[&str]) -> Self {
        for url in urls {
            self.engine.add_site_entry(unanswered(url));
        }
        self
    }

    pub async fn scan_percent(&self) -> u8 {
        self.control
            .scan_status()
            .await
            .unwrap()
            .total_scan_percentage
            .value()
    }

    pub async fn crawl_percent(&self) -> u8 {
        self.control
            .spider_status()
            .await
            .unwrap()
            .total_crawl_percentage
            .value()
    }

    /// URLs of captured requests submitted for active scanning, in order
    pub fn active_requests(&self) -> Vec<String> {
        self.engine
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                EngineCall::ActiveScan { request, .. } => {
                    let line = String::from_utf8(request).unwrap();
                    line.split_whitespace().nth(1).map(str::to_string)
                }
                _ => None,
            })
            .collect()
    }

    pub fn called(&self, pred: impl Fn(&EngineCall) -> bool) -> bool {
        self.engine.calls().iter().any(pred)
    }
}
