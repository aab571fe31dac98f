// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The control surface
//!
//! `ScanControl` is what a routing layer calls. It takes plain strings,
//! validates them, and drives the scope predicate, dispatcher, registry,
//! crawl tracker, and report facade, all of which share one engine.

use crate::config::ControlConfig;
use crate::crawl::CrawlTracker;
use crate::dispatch::{DispatchOutcome, DispatchSummary, ScanDispatcher, ScanMode};
use crate::error::{require_non_empty, ControlError};
use crate::facade::ReportFacade;
use crate::registry::JobRegistry;
use crate::scope::ScopePredicate;
use serde_json::Value;
use sr_adapters::ScanEngine;
use sr_core::{
    Clock, CrawlProgress, DispatchKey, HttpMessage, ReportFormat, ScanIssue, ScanProgress,
    SystemClock, Versions,
};
use std::sync::Arc;

pub struct ScanControl<E, C = SystemClock> {
    engine: E,
    config: ControlConfig,
    scope: ScopePredicate<E>,
    registry: Arc<JobRegistry<E>>,
    dispatcher: ScanDispatcher<E>,
    crawls: CrawlTracker<E, C>,
    facade: ReportFacade<E>,
}

impl<E: ScanEngine> ScanControl<E> {
    pub fn new(engine: E, config: ControlConfig) -> Self {
        Self::with_clock(engine, config, SystemClock)
    }
}

impl<E: ScanEngine, C: Clock> ScanControl<E, C> {
    pub fn with_clock(engine: E, config: ControlConfig, clock: C) -> Self {
        let registry = Arc::new(JobRegistry::new(engine.clone()));
        Self {
            scope: ScopePredicate::new(engine.clone()),
            dispatcher: ScanDispatcher::new(engine.clone(), Arc::clone(&registry)),
            crawls: CrawlTracker::new(engine.clone(), clock, config.crawl_window()),
            facade: ReportFacade::new(engine.clone(), config.report_dir.clone()),
            registry,
            engine,
            config,
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    // ── Engine information ──────────────────────────────────────────────

    pub async fn versions(&self) -> Result<Versions, ControlError> {
        self.facade.versions().await
    }

    pub async fn configuration(&self, paths: Option<&str>) -> Result<Value, ControlError> {
        self.facade.configuration(paths).await
    }

    pub async fn update_configuration(&self, json: &str) -> Result<(), ControlError> {
        self.facade.update_configuration(json).await
    }

    pub async fn proxy_history(&self) -> Result<Vec<HttpMessage>, ControlError> {
        self.facade.proxy_history().await
    }

    pub async fn site_map(&self, prefix: Option<&str>) -> Result<Vec<HttpMessage>, ControlError> {
        self.facade.site_map(prefix).await
    }

    // ── Scope ───────────────────────────────────────────────────────────

    pub async fn is_in_scope(&self, url: &str) -> Result<bool, ControlError> {
        self.scope.is_in_scope(require_non_empty("url", url)?).await
    }

    pub async fn include_in_scope(&self, url: &str) -> Result<(), ControlError> {
        self.scope.include(require_non_empty("url", url)?).await
    }

    pub async fn exclude_from_scope(&self, url: &str) -> Result<(), ControlError> {
        self.scope.exclude(require_non_empty("url", url)?).await
    }

    // ── Scanner ─────────────────────────────────────────────────────────

    pub async fn scan_passive(&self, base_url: &str) -> Result<DispatchSummary, ControlError> {
        self.scan(base_url, ScanMode::Passive).await
    }

    pub async fn scan_active(&self, base_url: &str) -> Result<DispatchSummary, ControlError> {
        self.scan(base_url, ScanMode::Active).await
    }

    async fn scan(&self, base_url: &str, mode: ScanMode) -> Result<DispatchSummary, ControlError> {
        let base_url = require_non_empty("baseUrl", base_url)?;
        match self.dispatcher.dispatch(base_url, mode).await? {
            DispatchOutcome::Dispatched(summary) => Ok(summary),
            DispatchOutcome::OutOfScope => Err(ControlError::OutOfScope(base_url.to_string())),
        }
    }

    /// Forget tracked active scans; running scans continue
    pub fn clear_scans(&self) -> usize {
        self.registry.clear()
    }

    pub async fn scan_status(&self) -> Result<ScanProgress, ControlError> {
        Ok(ScanProgress {
            total_scan_percentage: self.registry.aggregate_progress().await?,
        })
    }

    pub async fn scan_issues(&self, prefix: Option<&str>) -> Result<Vec<ScanIssue>, ControlError> {
        self.facade.scan_issues(prefix).await
    }

    /// Report bytes for issues under `prefix`; format defaults to `HTML`
    pub async fn report(
        &self,
        prefix: Option<&str>,
        format: Option<&str>,
    ) -> Result<Vec<u8>, ControlError> {
        let format = match format {
            Some(name) => name.parse::<ReportFormat>()?,
            None => ReportFormat::default(),
        };
        self.facade.report(prefix, format).await
    }

    // ── Crawler ─────────────────────────────────────────────────────────

    pub async fn spider(&self, base_url: &str) -> Result<DispatchKey, ControlError> {
        let base_url = require_non_empty("baseUrl", base_url)?;
        let url = self.scope.require(base_url).await?;
        self.crawls.submit_seed(&url).await
    }

    /// Heuristic crawl progress; 100 means discovery has stopped
    pub async fn spider_status(&self) -> Result<CrawlProgress, ControlError> {
        Ok(CrawlProgress {
            total_crawl_percentage: self.crawls.progress().await?,
        })
    }

    pub fn clear_crawls(&self) -> usize {
        self.crawls.clear()
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Shut the engine down. A headless engine is never asked to prompt.
    pub async fn stop(&self, prompt_user: bool) -> Result<(), ControlError> {
        let prompt_user = prompt_user && !self.config.headless;
        tracing::info!(prompt_user, "stopping engine");
        Ok(self.engine.exit_suite(prompt_user).await?)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
