// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope-filtered scan dispatch
//!
//! A dispatch pass walks the engine's site map under a base URL and submits
//! every eligible captured request. It is best effort: candidates that are
//! carved out of scope or never got a response are skipped and logged, and
//! the pass still succeeds.

use crate::error::ControlError;
use crate::registry::JobRegistry;
use crate::scope::ScopePredicate;
use sr_adapters::ScanEngine;
use sr_core::{
    matches_prefix, parse_url, DispatchKey, HttpMessage, NormalizedUrl, ScanTarget,
};
use std::fmt;
use std::sync::Arc;

/// Which engine scan primitive a dispatch pass uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Inspect captured traffic only; not tracked in the registry
    Passive,
    /// Replay and mutate requests; each submission is tracked
    Active,
}

impl ScanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScanMode::Passive => "passive",
            ScanMode::Active => "active",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts from one completed dispatch pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub submitted: usize,
    pub skipped_out_of_scope: usize,
    pub skipped_no_response: usize,
}

impl DispatchSummary {
    pub fn candidates(&self) -> usize {
        self.submitted + self.skipped_out_of_scope + self.skipped_no_response
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Base URL was not in scope; the site map was never read
    OutOfScope,
    Dispatched(DispatchSummary),
}

impl DispatchOutcome {
    /// Whether the pass ran, even if it submitted nothing
    pub fn accepted(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched(_))
    }

    pub fn summary(&self) -> Option<DispatchSummary> {
        match self {
            DispatchOutcome::Dispatched(summary) => Some(*summary),
            DispatchOutcome::OutOfScope => None,
        }
    }
}

enum Candidate {
    Eligible(DispatchKey, ScanTarget),
    OutOfScope,
    NoResponse,
}

/// Submits captured requests under a base URL to the engine's scanner
pub struct ScanDispatcher<E> {
    engine: E,
    scope: ScopePredicate<E>,
    registry: Arc<JobRegistry<E>>,
}

impl<E: ScanEngine> ScanDispatcher<E> {
    pub fn new(engine: E, registry: Arc<JobRegistry<E>>) -> Self {
        Self {
            scope: ScopePredicate::new(engine.clone()),
            engine,
            registry,
        }
    }

    /// Run one dispatch pass for `base_url`.
    ///
    /// A malformed base or candidate URL fails the pass with `InvalidInput`;
    /// submissions made before the failure stay recorded.
    pub async fn dispatch(
        &self,
        base_url: &str,
        mode: ScanMode,
    ) -> Result<DispatchOutcome, ControlError> {
        let base = parse_url(base_url)?;
        if !self.scope.contains(&base).await? {
            tracing::info!(base_url, %mode, "base url not in scope, nothing dispatched");
            return Ok(DispatchOutcome::OutOfScope);
        }

        let entries = self.engine.site_map(base_url).await?;
        let mut summary = DispatchSummary::default();
        for entry in entries.iter().filter(|m| matches_prefix(&m.url, base_url)) {
            match self.classify(entry).await? {
                Candidate::Eligible(key, target) => {
                    self.submit(key, &target, entry, mode).await?;
                    summary.submitted += 1;
                }
                Candidate::OutOfScope => {
                    tracing::info!(url = %entry.url, "skipped: excluded from scope");
                    summary.skipped_out_of_scope += 1;
                }
                Candidate::NoResponse => {
                    tracing::debug!(url = %entry.url, "skipped: no captured response");
                    summary.skipped_no_response += 1;
                }
            }
        }

        tracing::info!(
            base_url,
            %mode,
            submitted = summary.submitted,
            skipped = summary.skipped_out_of_scope + summary.skipped_no_response,
            "dispatch pass complete"
        );
        Ok(DispatchOutcome::Dispatched(summary))
    }

    async fn classify(&self, entry: &HttpMessage) -> Result<Candidate, ControlError> {
        let url = NormalizedUrl::parse(&entry.url)?;
        if !self.scope.contains(&url).await? {
            return Ok(Candidate::OutOfScope);
        }
        if !entry.has_response() {
            return Ok(Candidate::NoResponse);
        }
        let target = ScanTarget::from_url(&url)?;
        Ok(Candidate::Eligible(DispatchKey::from_url(&url), target))
    }

    async fn submit(
        &self,
        key: DispatchKey,
        target: &ScanTarget,
        entry: &HttpMessage,
        mode: ScanMode,
    ) -> Result<(), ControlError> {
        match (mode, entry.response.as_deref()) {
            (ScanMode::Active, _) => {
                let ticket = self.engine.active_scan(target, &entry.request).await?;
                tracing::debug!(%key, %ticket, "active scan submitted");
                self.registry.record(key, ticket);
            }
            (ScanMode::Passive, Some(response)) => {
                self.engine
                    .passive_scan(target, &entry.request, response)
                    .await?;
                tracing::debug!(%key, "passive scan submitted");
            }
            // classify only yields responded entries
            (ScanMode::Passive, None) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
