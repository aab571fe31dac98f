// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion percentages reported by the control surface

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-number completion percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(100);

    /// Clamp an engine-reported value into range
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }

    /// Arithmetic mean, truncated toward zero.
    ///
    /// Every entry weighs the same. An empty set has nothing left to do and
    /// is reported complete.
    pub fn mean<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Percent>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), p| (sum + u64::from(p.0), count + 1));
        if count == 0 {
            return Self::COMPLETE;
        }
        Self((sum / count) as u8)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

/// Aggregate scanner progress as returned to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanProgress {
    pub total_scan_percentage: Percent,
}

/// Estimated crawler progress as returned to callers.
///
/// This is a heuristic: 100 means the crawler has stopped discovering new
/// resources, not that the engine reported it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlProgress {
    pub total_crawl_percentage: Percent,
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
