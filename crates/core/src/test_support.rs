// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{HttpMessage, ScanIssue, Severity};

// ── Site map factory functions ──────────────────────────────────────────────

/// Site map entry with a captured `200 OK` response
pub fn captured(url: &str) -> HttpMessage {
    HttpMessage::new(url, request_line(url))
        .with_response(200, b"HTTP/1.1 200 OK\r\n\r\n".to_vec())
}

/// Site map entry that was requested but never answered
pub fn unanswered(url: &str) -> HttpMessage {
    HttpMessage::new(url, request_line(url))
}

pub fn issue(url: &str, name: &str) -> ScanIssue {
    ScanIssue::new(url, name, Severity::Medium)
}

fn request_line(url: &str) -> Vec<u8> {
    format!("GET {url} HTTP/1.1\r\n\r\n").into_bytes()
}
