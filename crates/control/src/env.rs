// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the control crate.

use std::path::PathBuf;
use std::time::Duration;

/// Crawl stability window override
pub fn crawl_window_ms() -> Option<Duration> {
    std::env::var("SR_CRAWL_WINDOW_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Headless flag: `1`/`true` or `0`/`false`
pub fn headless() -> Option<bool> {
    std::env::var("SR_HEADLESS")
        .ok()
        .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        })
}

/// Directory for transient report files
pub fn report_dir() -> Option<PathBuf> {
    std::env::var("SR_REPORT_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
