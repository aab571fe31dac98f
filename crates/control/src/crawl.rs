// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crawl seeding and completion estimate
//!
//! The engine reports no crawl progress at all. Completion is inferred from
//! the site map: once a check finds no new resources under a seed since the
//! previous check, the crawl is reported done. A configured stability window
//! additionally requires the count to have held still that long. A crawler
//! that pauses mid-discovery is reported complete early.

use crate::error::ControlError;
use dashmap::DashMap;
use sr_adapters::ScanEngine;
use sr_core::{Clock, DispatchKey, Percent, Url};
use std::time::{Duration, Instant};

/// Reported for a seed that is still discovering resources
pub const CRAWL_IN_PROGRESS: Percent = Percent::new(50);

/// Discovery history for one seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlBaseline {
    pub submitted_at: Instant,
    pub initial_count: usize,
    pub last_count: usize,
    pub last_changed_at: Instant,
    pub window: Duration,
}

impl CrawlBaseline {
    fn new(now: Instant, count: usize, window: Duration) -> Self {
        Self {
            submitted_at: now,
            initial_count: count,
            last_count: count,
            last_changed_at: now,
            window,
        }
    }

    /// Fold in a fresh count and estimate completion
    pub fn observe(&mut self, count: usize, now: Instant) -> Percent {
        if count != self.last_count {
            self.last_count = count;
            self.last_changed_at = now;
            return CRAWL_IN_PROGRESS;
        }
        if now.saturating_duration_since(self.last_changed_at) >= self.window {
            Percent::COMPLETE
        } else {
            CRAWL_IN_PROGRESS
        }
    }

    /// Time since the seed was submitted
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.submitted_at)
    }

    /// Resources discovered since the seed was submitted
    pub fn discovered(&self) -> usize {
        self.last_count.saturating_sub(self.initial_count)
    }
}

/// Tracks crawl seeds submitted by this process
pub struct CrawlTracker<E, C> {
    engine: E,
    clock: C,
    window: Duration,
    baselines: DashMap<DispatchKey, CrawlBaseline>,
}

impl<E: ScanEngine, C: Clock> CrawlTracker<E, C> {
    pub fn new(engine: E, clock: C, window: Duration) -> Self {
        Self {
            engine,
            clock,
            window,
            baselines: DashMap::new(),
        }
    }

    /// Hand `url` to the crawler and snapshot the current site map size.
    ///
    /// Scope is the caller's concern. Reseeding the same URL restarts its
    /// baseline.
    pub async fn submit_seed(&self, url: &Url) -> Result<DispatchKey, ControlError> {
        let key = DispatchKey::parse(url.as_str())?;
        self.engine.send_to_crawler(url).await?;
        let count = self.engine.site_map(key.as_str()).await?.len();
        let baseline = CrawlBaseline::new(self.clock.now(), count, self.window);
        self.baselines.insert(key.clone(), baseline);
        tracing::info!(seed = %key, count, "crawl seeded");
        Ok(key)
    }

    /// Lowest estimate across all seeds; 100 when nothing is tracked
    pub async fn progress(&self) -> Result<Percent, ControlError> {
        let keys: Vec<DispatchKey> = self.baselines.iter().map(|e| e.key().clone()).collect();
        let mut lowest = Percent::COMPLETE;
        for key in keys {
            let count = self.engine.site_map(key.as_str()).await?.len();
            let now = self.clock.now();
            // A concurrent clear may have dropped the seed
            let Some(mut baseline) = self.baselines.get_mut(&key) else {
                continue;
            };
            let estimate = baseline.observe(count, now);
            tracing::debug!(
                seed = %key,
                count,
                discovered = baseline.discovered(),
                age_ms = baseline.age(now).as_millis() as u64,
                %estimate,
                "crawl checked"
            );
            lowest = lowest.min(estimate);
        }
        Ok(lowest)
    }

    pub fn baseline(&self, key: &DispatchKey) -> Option<CrawlBaseline> {
        self.baselines.get(key).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// Forget every seed. The engine's crawler keeps running.
    pub fn clear(&self) -> usize {
        let forgotten = self.baselines.len();
        self.baselines.clear();
        tracing::info!(forgotten, "crawl tracking cleared");
        forgotten
    }
}

#[cfg(test)]
#[path = "crawl_tests.rs"]
mod tests;
