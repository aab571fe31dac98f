// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake scanning engine for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{EngineError, ScanEngine};
use async_trait::async_trait;
use parking_lot::{Mutex, MutexGuard};
use serde_json::{Map, Value};
use sr_core::{HttpMessage, ReportFormat, ScanIssue, ScanTarget, TicketId, Url};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded engine call
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    SiteMap {
        prefix: String,
    },
    ProxyHistory,
    IsInScope {
        url: String,
    },
    IncludeInScope {
        url: String,
    },
    ExcludeFromScope {
        url: String,
    },
    ActiveScan {
        target: ScanTarget,
        request: Vec<u8>,
    },
    PassiveScan {
        target: ScanTarget,
        request: Vec<u8>,
        response: Vec<u8>,
    },
    SendToCrawler {
        url: String,
    },
    PercentComplete {
        ticket: TicketId,
    },
    ScanIssues {
        prefix: String,
    },
    GenerateReport {
        format: ReportFormat,
        issue_count: usize,
        destination: PathBuf,
    },
    Version,
    SaveConfig {
        paths: Option<String>,
    },
    LoadConfig {
        json: String,
    },
    ExitSuite {
        prompt_user: bool,
    },
}

struct FakeEngineState {
    site_map: Vec<HttpMessage>,
    proxy_history: Vec<HttpMessage>,
    includes: Vec<String>,
    excludes: Vec<String>,
    tickets: HashMap<TicketId, u8>,
    initial_progress: u8,
    next_ticket: u64,
    issues: Vec<ScanIssue>,
    config: Value,
    version: Vec<String>,
    calls: Vec<EngineCall>,
    unavailable: bool,
    report_failure: bool,
    exited: bool,
}

/// Fake engine with scripted site map, scope, and scan progress.
///
/// Scope is prefix based: a URL is in scope when it starts with an included
/// prefix and does not start with an excluded one. Excluding a URL that sits
/// under an included prefix records a scope exception.
#[derive(Clone)]
pub struct FakeEngine {
    inner: Arc<Mutex<FakeEngineState>>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeEngineState {
                site_map: Vec::new(),
                proxy_history: Vec::new(),
                includes: Vec::new(),
                excludes: Vec::new(),
                tickets: HashMap::new(),
                initial_progress: 0,
                next_ticket: 0,
                issues: Vec::new(),
                config: serde_json::json!({
                    "proxy": {
                        "intercept_client_requests": { "do_intercept": false },
                        "request_listeners": [{ "listener_port": 8080 }]
                    },
                    "scanner": { "live_passive_crawl": true }
                }),
                version: vec!["2023".to_string(), "10".to_string(), "1".to_string()],
                calls: Vec::new(),
                unavailable: false,
                report_failure: false,
                exited: false,
            })),
        }
    }
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<EngineCall> {
        self.inner.lock().calls.clone()
    }

    /// Forget recorded calls (state is kept)
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    /// Add an entry to the site map, as if it was captured by the proxy
    pub fn add_site_entry(&self, message: HttpMessage) {
        self.inner.lock().site_map.push(message);
    }

    pub fn add_proxy_entry(&self, message: HttpMessage) {
        self.inner.lock().proxy_history.push(message);
    }

    pub fn add_issue(&self, issue: ScanIssue) {
        self.inner.lock().issues.push(issue);
    }

    /// Set progress reported for a ticket
    pub fn set_progress(&self, ticket: &TicketId, percent: u8) {
        self.inner.lock().tickets.insert(ticket.clone(), percent);
    }

    /// Set progress for every ticket issued so far
    pub fn set_all_progress(&self, percent: u8) {
        for value in self.inner.lock().tickets.values_mut() {
            *value = percent;
        }
    }

    /// Progress reported by tickets issued from now on
    pub fn set_initial_progress(&self, percent: u8) {
        self.inner.lock().initial_progress = percent;
    }

    /// Tickets issued so far, in issue order
    pub fn tickets(&self) -> Vec<TicketId> {
        let inner = self.inner.lock();
        let mut tickets: Vec<_> = inner.tickets.keys().cloned().collect();
        tickets.sort_by_key(|t| {
            t.as_str()
                .rsplit('-')
                .next()
                .and_then(|n| n.parse::<u64>().ok())
                .unwrap_or(0)
        });
        tickets
    }

    /// Make every subsequent call fail with `EngineError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unavailable = unavailable;
    }

    /// Make report generation fail after the destination file is written
    pub fn set_report_failure(&self, fail: bool) {
        self.inner.lock().report_failure = fail;
    }

    pub fn set_version(&self, parts: &[&str]) {
        self.inner.lock().version = parts.iter().map(|p| p.to_string()).collect();
    }

    /// Current configuration document
    pub fn config(&self) -> Value {
        self.inner.lock().config.clone()
    }

    pub fn has_exited(&self) -> bool {
        self.inner.lock().exited
    }

    /// Record a call, failing if the engine is marked unavailable
    fn record(&self, call: EngineCall) -> Result<MutexGuard<'_, FakeEngineState>, EngineError> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        if inner.unavailable {
            return Err(EngineError::Unavailable("fake engine offline".to_string()));
        }
        Ok(inner)
    }
}

fn in_scope(state: &FakeEngineState, url: &str) -> bool {
    state.includes.iter().any(|p| url.starts_with(p.as_str()))
        && !state.excludes.iter().any(|p| url.starts_with(p.as_str()))
}

/// Pick the subtree at a dotted path (`proxy.request_listeners`)
fn select_path<'a>(config: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(config, |node, segment| node.get(segment))
}

/// Insert `value` at a dotted path, creating intermediate objects
fn insert_path(out: &mut Map<String, Value>, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut node = out;
    for segment in parents {
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        node = match entry {
            Value::Object(map) => map,
            _ => return,
        };
    }
    node.insert(last.to_string(), value);
}

fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (target, patch) => *target = patch,
    }
}

#[async_trait]
impl ScanEngine for FakeEngine {
    async fn site_map(&self, prefix: &str) -> Result<Vec<HttpMessage>, EngineError> {
        let inner = self.record(EngineCall::SiteMap {
            prefix: prefix.to_string(),
        })?;
        Ok(inner
            .site_map
            .iter()
            .filter(|m| m.url.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn proxy_history(&self) -> Result<Vec<HttpMessage>, EngineError> {
        let inner = self.record(EngineCall::ProxyHistory)?;
        Ok(inner.proxy_history.clone())
    }

    async fn is_in_scope(&self, url: &Url) -> Result<bool, EngineError> {
        let inner = self.record(EngineCall::IsInScope {
            url: url.to_string(),
        })?;
        Ok(in_scope(&inner, url.as_str()))
    }

    async fn include_in_scope(&self, url: &Url) -> Result<(), EngineError> {
        let mut inner = self.record(EngineCall::IncludeInScope {
            url: url.to_string(),
        })?;
        let url = url.as_str();
        inner.excludes.retain(|p| p != url);
        if !inner.includes.iter().any(|p| p == url) {
            inner.includes.push(url.to_string());
        }
        Ok(())
    }

    async fn exclude_from_scope(&self, url: &Url) -> Result<(), EngineError> {
        let mut inner = self.record(EngineCall::ExcludeFromScope {
            url: url.to_string(),
        })?;
        let url = url.as_str();
        inner.includes.retain(|p| p != url);
        let covered = inner.includes.iter().any(|p| url.starts_with(p.as_str()));
        if covered && !inner.excludes.iter().any(|p| p == url) {
            inner.excludes.push(url.to_string());
        }
        Ok(())
    }

    async fn active_scan(
        &self,
        target: &ScanTarget,
        request: &[u8],
    ) -> Result<TicketId, EngineError> {
        let mut inner = self.record(EngineCall::ActiveScan {
            target: target.clone(),
            request: request.to_vec(),
        })?;
        inner.next_ticket += 1;
        let ticket = TicketId::new(format!("ticket-{}", inner.next_ticket));
        let progress = inner.initial_progress;
        inner.tickets.insert(ticket.clone(), progress);
        Ok(ticket)
    }

    async fn passive_scan(
        &self,
        target: &ScanTarget,
        request: &[u8],
        response: &[u8],
    ) -> Result<(), EngineError> {
        self.record(EngineCall::PassiveScan {
            target: target.clone(),
            request: request.to_vec(),
            response: response.to_vec(),
        })?;
        Ok(())
    }

    async fn send_to_crawler(&self, url: &Url) -> Result<(), EngineError> {
        self.record(EngineCall::SendToCrawler {
            url: url.to_string(),
        })?;
        Ok(())
    }

    async fn percent_complete(&self, ticket: &TicketId) -> Result<u8, EngineError> {
        let inner = self.record(EngineCall::PercentComplete {
            ticket: ticket.clone(),
        })?;
        inner
            .tickets
            .get(ticket)
            .copied()
            .ok_or_else(|| EngineError::Rejected(format!("unknown ticket: {ticket}")))
    }

    async fn scan_issues(&self, prefix: &str) -> Result<Vec<ScanIssue>, EngineError> {
        let inner = self.record(EngineCall::ScanIssues {
            prefix: prefix.to_string(),
        })?;
        Ok(inner
            .issues
            .iter()
            .filter(|i| i.url.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn generate_report(
        &self,
        format: ReportFormat,
        issues: &[ScanIssue],
        destination: &Path,
    ) -> Result<(), EngineError> {
        let report_failure = self
            .record(EngineCall::GenerateReport {
                format,
                issue_count: issues.len(),
                destination: destination.to_path_buf(),
            })?
            .report_failure;
        let mut body = format!("{format} report: {} issues\n", issues.len());
        for issue in issues {
            body.push_str(&format!("{} {} {}\n", issue.severity, issue.name, issue.url));
        }
        std::fs::write(destination, body)
            .map_err(|e| EngineError::Unavailable(format!("report write failed: {e}")))?;
        if report_failure {
            return Err(EngineError::Unavailable("report renderer crashed".to_string()));
        }
        Ok(())
    }

    async fn version(&self) -> Result<Vec<String>, EngineError> {
        let inner = self.record(EngineCall::Version)?;
        Ok(inner.version.clone())
    }

    async fn save_config(&self, paths: Option<&str>) -> Result<String, EngineError> {
        let inner = self.record(EngineCall::SaveConfig {
            paths: paths.map(str::to_string),
        })?;
        let selected = match paths.map(str::trim).filter(|p| !p.is_empty()) {
            None => inner.config.clone(),
            Some(paths) => {
                let mut out = Map::new();
                for path in paths.split(',').map(str::trim) {
                    if let Some(value) = select_path(&inner.config, path) {
                        insert_path(&mut out, path, value.clone());
                    }
                }
                Value::Object(out)
            }
        };
        serde_json::to_string(&selected).map_err(|e| EngineError::Unavailable(e.to_string()))
    }

    async fn load_config(&self, json: &str) -> Result<(), EngineError> {
        let mut inner = self.record(EngineCall::LoadConfig {
            json: json.to_string(),
        })?;
        let patch: Value = serde_json::from_str(json)
            .map_err(|e| EngineError::Rejected(format!("invalid configuration: {e}")))?;
        merge(&mut inner.config, patch);
        Ok(())
    }

    async fn exit_suite(&self, prompt_user: bool) -> Result<(), EngineError> {
        let mut inner = self.record(EngineCall::ExitSuite { prompt_user })?;
        inner.exited = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
