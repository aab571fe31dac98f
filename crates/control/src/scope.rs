// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scope predicate
//!
//! Scope rules live in the engine. Nothing is cached here: scope can change
//! between a dispatch decision and a later query, so every check asks the
//! engine again.

use crate::error::ControlError;
use sr_adapters::ScanEngine;
use sr_core::{parse_url, Url};

#[derive(Clone)]
pub struct ScopePredicate<E> {
    engine: E,
}

impl<E: ScanEngine> ScopePredicate<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Query the engine for an already parsed URL
    pub async fn contains(&self, url: &Url) -> Result<bool, ControlError> {
        Ok(self.engine.is_in_scope(url).await?)
    }

    /// Parse `input` and query the engine
    pub async fn is_in_scope(&self, input: &str) -> Result<bool, ControlError> {
        let url = parse_url(input)?;
        self.contains(&url).await
    }

    /// Parse `input`, failing with `OutOfScope` if the engine does not cover it
    pub async fn require(&self, input: &str) -> Result<Url, ControlError> {
        let url = parse_url(input)?;
        let in_scope = self.contains(&url).await?;
        tracing::info!(url = input, in_scope, "scope checked");
        if !in_scope {
            return Err(ControlError::OutOfScope(input.to_string()));
        }
        Ok(url)
    }

    pub async fn include(&self, input: &str) -> Result<(), ControlError> {
        let url = parse_url(input)?;
        Ok(self.engine.include_in_scope(&url).await?)
    }

    pub async fn exclude(&self, input: &str) -> Result<(), ControlError> {
        let url = parse_url(input)?;
        Ok(self.engine.exclude_from_scope(&url).await?)
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
