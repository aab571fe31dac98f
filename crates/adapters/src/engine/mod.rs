// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scanning engine adapters
//!
//! The engine is the stateful native tool that owns scope rules, the site
//! map, the scanner queue, and the crawler. Its primitives are
//! fire-and-forget: submitting work returns immediately, and progress can
//! only be learned by asking again later.
//!
//! ```text
//! control layer ──submit──▶ ScanEngine ──▶ native scanner / crawler
//!       ▲                        │
//!       └───── poll progress ────┘
//! ```

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EngineCall, FakeEngine};

use async_trait::async_trait;
use sr_core::{HttpMessage, ReportFormat, ScanIssue, ScanTarget, TicketId, Url};
use std::path::Path;
use thiserror::Error;

/// Errors from engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be reached or failed while handling the call
    #[error("engine unavailable: {0}")]
    Unavailable(String),
    /// The engine understood the call but refused it
    #[error("engine rejected request: {0}")]
    Rejected(String),
}

/// Adapter for the native scanning engine
#[async_trait]
pub trait ScanEngine: Clone + Send + Sync + 'static {
    /// Captured request/response pairs whose URL starts with `prefix`.
    ///
    /// An empty prefix returns the whole site map.
    async fn site_map(&self, prefix: &str) -> Result<Vec<HttpMessage>, EngineError>;

    /// Everything that has passed through the intercepting proxy
    async fn proxy_history(&self) -> Result<Vec<HttpMessage>, EngineError>;

    /// Whether the engine's suite-wide scope covers `url`
    async fn is_in_scope(&self, url: &Url) -> Result<bool, EngineError>;

    async fn include_in_scope(&self, url: &Url) -> Result<(), EngineError>;

    async fn exclude_from_scope(&self, url: &Url) -> Result<(), EngineError>;

    /// Queue an active scan of one captured request
    async fn active_scan(
        &self,
        target: &ScanTarget,
        request: &[u8],
    ) -> Result<TicketId, EngineError>;

    /// Run passive checks over a captured request/response pair.
    ///
    /// Passive scans are not individually tracked, so no ticket is returned.
    async fn passive_scan(
        &self,
        target: &ScanTarget,
        request: &[u8],
        response: &[u8],
    ) -> Result<(), EngineError>;

    /// Hand a seed URL to the crawler
    async fn send_to_crawler(&self, url: &Url) -> Result<(), EngineError>;

    /// Completion of a queued active scan, `0..=100`
    async fn percent_complete(&self, ticket: &TicketId) -> Result<u8, EngineError>;

    /// Issues whose URL starts with `prefix` (empty prefix returns all)
    async fn scan_issues(&self, prefix: &str) -> Result<Vec<ScanIssue>, EngineError>;

    /// Render `issues` into a report file at `destination`
    async fn generate_report(
        &self,
        format: ReportFormat,
        issues: &[ScanIssue],
        destination: &Path,
    ) -> Result<(), EngineError>;

    /// Engine version as its dotted components (e.g. `["2023", "10", "1"]`)
    async fn version(&self) -> Result<Vec<String>, EngineError>;

    /// Project configuration as JSON, optionally restricted to config paths
    async fn save_config(&self, paths: Option<&str>) -> Result<String, EngineError>;

    /// Merge a JSON configuration document into the project configuration
    async fn load_config(&self, json: &str) -> Result<(), EngineError>;

    /// Shut the engine down
    async fn exit_suite(&self, prompt_user: bool) -> Result<(), EngineError>;
}
