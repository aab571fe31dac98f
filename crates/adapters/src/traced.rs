// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::engine::{EngineError, ScanEngine};
use async_trait::async_trait;
use sr_core::{HttpMessage, ReportFormat, ScanIssue, ScanTarget, TicketId, Url};
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any ScanEngine
#[derive(Clone)]
pub struct TracedEngine<E> {
    inner: E,
}

impl<E> TracedEngine<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: ScanEngine> ScanEngine for TracedEngine<E> {
    async fn site_map(&self, prefix: &str) -> Result<Vec<HttpMessage>, EngineError> {
        let result = self.inner.site_map(prefix).await;
        match &result {
            Ok(entries) => tracing::debug!(prefix, entries = entries.len(), "site map read"),
            Err(e) => tracing::error!(prefix, error = %e, "site map failed"),
        }
        result
    }

    async fn proxy_history(&self) -> Result<Vec<HttpMessage>, EngineError> {
        let result = self.inner.proxy_history().await;
        match &result {
            Ok(entries) => tracing::debug!(entries = entries.len(), "proxy history read"),
            Err(e) => tracing::error!(error = %e, "proxy history failed"),
        }
        result
    }

    async fn is_in_scope(&self, url: &Url) -> Result<bool, EngineError> {
        let result = self.inner.is_in_scope(url).await;
        tracing::trace!(url = %url, in_scope = ?result.as_ref().ok(), "scope checked");
        if let Err(ref e) = result {
            tracing::error!(url = %url, error = %e, "scope check failed");
        }
        result
    }

    async fn include_in_scope(&self, url: &Url) -> Result<(), EngineError> {
        let result = self.inner.include_in_scope(url).await;
        tracing::info_span!("scope.include", url = %url).in_scope(|| match &result {
            Ok(()) => tracing::info!("included"),
            Err(e) => tracing::error!(error = %e, "include failed"),
        });
        result
    }

    async fn exclude_from_scope(&self, url: &Url) -> Result<(), EngineError> {
        let result = self.inner.exclude_from_scope(url).await;
        tracing::info_span!("scope.exclude", url = %url).in_scope(|| match &result {
            Ok(()) => tracing::info!("excluded"),
            Err(e) => tracing::error!(error = %e, "exclude failed"),
        });
        result
    }

    async fn active_scan(
        &self,
        target: &ScanTarget,
        request: &[u8],
    ) -> Result<TicketId, EngineError> {
        let span = tracing::info_span!(
            "scan.active",
            host = %target.host,
            port = target.port,
            tls = target.use_tls
        );
        async {
            tracing::debug!(request_len = request.len(), "submitting");
            let start = std::time::Instant::now();
            let result = self.inner.active_scan(target, request).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(ticket) => tracing::info!(%ticket, elapsed_ms, "active scan queued"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "active scan failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn passive_scan(
        &self,
        target: &ScanTarget,
        request: &[u8],
        response: &[u8],
    ) -> Result<(), EngineError> {
        let result = self.inner.passive_scan(target, request, response).await;
        tracing::info_span!("scan.passive", host = %target.host, port = target.port).in_scope(
            || match &result {
                Ok(()) => tracing::debug!(
                    request_len = request.len(),
                    response_len = response.len(),
                    "passive scan submitted"
                ),
                Err(e) => tracing::error!(error = %e, "passive scan failed"),
            },
        );
        result
    }

    async fn send_to_crawler(&self, url: &Url) -> Result<(), EngineError> {
        let result = self.inner.send_to_crawler(url).await;
        tracing::info_span!("crawl.seed", url = %url).in_scope(|| match &result {
            Ok(()) => tracing::info!("seed sent"),
            Err(e) => tracing::error!(error = %e, "seed failed"),
        });
        result
    }

    async fn percent_complete(&self, ticket: &TicketId) -> Result<u8, EngineError> {
        let result = self.inner.percent_complete(ticket).await;
        tracing::trace!(%ticket, percent = ?result.as_ref().ok(), "progress checked");
        if let Err(ref e) = result {
            tracing::error!(%ticket, error = %e, "progress check failed");
        }
        result
    }

    async fn scan_issues(&self, prefix: &str) -> Result<Vec<ScanIssue>, EngineError> {
        let result = self.inner.scan_issues(prefix).await;
        match &result {
            Ok(issues) => tracing::debug!(prefix, issues = issues.len(), "issues read"),
            Err(e) => tracing::error!(prefix, error = %e, "issue listing failed"),
        }
        result
    }

    async fn generate_report(
        &self,
        format: ReportFormat,
        issues: &[ScanIssue],
        destination: &Path,
    ) -> Result<(), EngineError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.generate_report(format, issues, destination).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(issues = issues.len(), elapsed_ms, "report written"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "report failed"),
            }
            result
        }
        .instrument(tracing::info_span!(
            "report.generate",
            %format,
            destination = %destination.display()
        ))
        .await
    }

    async fn version(&self) -> Result<Vec<String>, EngineError> {
        self.inner.version().await
    }

    async fn save_config(&self, paths: Option<&str>) -> Result<String, EngineError> {
        let result = self.inner.save_config(paths).await;
        if let Err(ref e) = result {
            tracing::error!(paths = ?paths, error = %e, "config read failed");
        }
        result
    }

    async fn load_config(&self, json: &str) -> Result<(), EngineError> {
        let result = self.inner.load_config(json).await;
        match &result {
            Ok(()) => tracing::info!(json_len = json.len(), "configuration updated"),
            Err(e) => tracing::error!(error = %e, "configuration update failed"),
        }
        result
    }

    async fn exit_suite(&self, prompt_user: bool) -> Result<(), EngineError> {
        tracing::info!(prompt_user, "shutting down engine");
        let result = self.inner.exit_suite(prompt_user).await;
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "exit failed (may be expected)");
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
