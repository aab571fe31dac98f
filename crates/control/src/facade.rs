// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-through queries and report generation
//!
//! Every prefix filter here is the same case-sensitive textual match the
//! dispatcher uses. Results are re-filtered locally so an engine that
//! matches more loosely cannot widen what callers see.

use crate::error::ControlError;
use serde_json::Value;
use sr_adapters::{EngineError, ScanEngine};
use sr_core::{matches_prefix, HttpMessage, ReportFormat, ScanIssue, Versions};
use std::path::PathBuf;

pub struct ReportFacade<E> {
    engine: E,
    report_dir: Option<PathBuf>,
}

impl<E: ScanEngine> ReportFacade<E> {
    pub fn new(engine: E, report_dir: Option<PathBuf>) -> Self {
        Self { engine, report_dir }
    }

    /// Issues under `prefix`, or every issue when no prefix is given
    pub async fn scan_issues(&self, prefix: Option<&str>) -> Result<Vec<ScanIssue>, ControlError> {
        let prefix = prefix.unwrap_or_default();
        let mut issues = self.engine.scan_issues(prefix).await?;
        issues.retain(|issue| matches_prefix(&issue.url, prefix));
        Ok(issues)
    }

    pub async fn site_map(&self, prefix: Option<&str>) -> Result<Vec<HttpMessage>, ControlError> {
        let prefix = prefix.unwrap_or_default();
        let mut entries = self.engine.site_map(prefix).await?;
        entries.retain(|entry| matches_prefix(&entry.url, prefix));
        Ok(entries)
    }

    pub async fn proxy_history(&self) -> Result<Vec<HttpMessage>, ControlError> {
        Ok(self.engine.proxy_history().await?)
    }

    /// Render a report of the issues under `prefix` and return its bytes.
    ///
    /// The engine writes into a temporary file that is removed when this
    /// returns, whether or not generation succeeded.
    pub async fn report(
        &self,
        prefix: Option<&str>,
        format: ReportFormat,
    ) -> Result<Vec<u8>, ControlError> {
        let issues = self.scan_issues(prefix).await?;
        let suffix = format!(".{}", format.extension());
        let mut builder = tempfile::Builder::new();
        builder.prefix("report").suffix(&suffix);
        let file = match &self.report_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        self.engine
            .generate_report(format, &issues, file.path())
            .await?;
        let bytes = tokio::fs::read(file.path()).await?;
        tracing::info!(
            %format,
            issues = issues.len(),
            bytes = bytes.len(),
            "report generated"
        );
        Ok(bytes)
    }

    pub async fn versions(&self) -> Result<Versions, ControlError> {
        let parts = self.engine.version().await?;
        Ok(Versions {
            engine_version: parts.join("."),
            extension_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Engine configuration, optionally narrowed to comma-separated dotted paths
    pub async fn configuration(&self, paths: Option<&str>) -> Result<Value, ControlError> {
        let json = self.engine.save_config(paths).await?;
        serde_json::from_str(&json).map_err(|e| {
            EngineError::Rejected(format!("engine returned invalid configuration: {e}")).into()
        })
    }

    /// Merge a JSON document into the engine configuration
    pub async fn update_configuration(&self, json: &str) -> Result<(), ControlError> {
        if json.trim().is_empty() {
            return Err(ControlError::InvalidInput(
                "configuration document must not be empty".to_string(),
            ));
        }
        serde_json::from_str::<Value>(json)
            .map_err(|e| ControlError::InvalidInput(format!("configuration is not JSON: {e}")))?;
        Ok(self.engine.load_config(json).await?)
    }
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod tests;
