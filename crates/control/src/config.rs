// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control surface configuration

use crate::env;
use crate::error::ControlError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default time a crawl must stop discovering before it is reported done.
///
/// Zero means a crawl is done as soon as one check sees no new resources.
pub const DEFAULT_CRAWL_WINDOW_MS: u64 = 0;

/// Control surface configuration.
///
/// ```toml
/// crawl_window_ms = 3000
/// headless = true
/// report_dir = "/var/tmp/reports"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlConfig {
    /// Extra time the site map must stay unchanged before a crawl counts as
    /// done, in milliseconds
    pub crawl_window_ms: u64,
    /// Engine runs without a UI; shutdown never prompts
    pub headless: bool,
    /// Where transient report files are written (OS temp dir if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            crawl_window_ms: DEFAULT_CRAWL_WINDOW_MS,
            headless: true,
            report_dir: None,
        }
    }
}

impl ControlConfig {
    /// Defaults with `SR_*` environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ControlError> {
        let config_error = |e: &dyn std::fmt::Display| {
            ControlError::Config(format!("{}: {e}", path.display()))
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_error(&e))?;
        toml::from_str(&text).map_err(|e| config_error(&e))
    }

    /// Apply `SR_CRAWL_WINDOW_MS`, `SR_HEADLESS`, and `SR_REPORT_DIR`
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(window) = env::crawl_window_ms() {
            self.crawl_window_ms = window.as_millis() as u64;
        }
        if let Some(headless) = env::headless() {
            self.headless = headless;
        }
        if let Some(dir) = env::report_dir() {
            self.report_dir = Some(dir);
        }
        self
    }

    pub fn crawl_window(&self) -> Duration {
        Duration::from_millis(self.crawl_window_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
