// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of active scans this process submitted.
//!
//! The engine has no notion of "a batch I submitted", so this is the only
//! record of what was dispatched. Progress is never cached: every
//! [`JobRegistry::aggregate_progress`] call asks the engine about each
//! tracked ticket again.
//!
//! Concurrency: records for different keys land in independent shards and
//! do not block each other. A `clear` racing with `record` may keep or drop
//! the racing entries, but every entry observed is whole.

use crate::error::ControlError;
use dashmap::DashMap;
use sr_adapters::ScanEngine;
use sr_core::{DispatchKey, Percent, TicketId};

pub struct JobRegistry<E> {
    engine: E,
    jobs: DashMap<DispatchKey, TicketId>,
}

impl<E: ScanEngine> JobRegistry<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            jobs: DashMap::new(),
        }
    }

    /// Track `ticket` under `key`, replacing any earlier ticket for that key.
    ///
    /// Returns the replaced ticket, if any.
    pub fn record(&self, key: DispatchKey, ticket: TicketId) -> Option<TicketId> {
        let replaced = self.jobs.insert(key, ticket);
        if let Some(ref old) = replaced {
            tracing::debug!(%old, "replaced earlier ticket for target");
        }
        replaced
    }

    pub fn ticket(&self, key: &DispatchKey) -> Option<TicketId> {
        self.jobs.get(key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Mean completion over every tracked ticket, truncated.
    ///
    /// An empty registry reports 100. Each ticket weighs the same regardless
    /// of how much work is behind it.
    pub async fn aggregate_progress(&self) -> Result<Percent, ControlError> {
        // Snapshot first; no shard lock is held across engine calls.
        let tickets: Vec<TicketId> = self.jobs.iter().map(|e| e.value().clone()).collect();
        if tickets.is_empty() {
            return Ok(Percent::COMPLETE);
        }

        let mut percents = Vec::with_capacity(tickets.len());
        for ticket in &tickets {
            percents.push(Percent::new(self.engine.percent_complete(ticket).await?));
        }
        let mean = Percent::mean(percents);
        tracing::info!(tracked = tickets.len(), %mean, "scan progress");
        Ok(mean)
    }

    /// Forget every tracked ticket. Running scans are not cancelled.
    pub fn clear(&self) -> usize {
        let forgotten = self.jobs.len();
        self.jobs.clear();
        tracing::info!(forgotten, "scan registry cleared");
        forgotten
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
