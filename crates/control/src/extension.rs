// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registers the control surface with an extension host

use crate::config::ControlConfig;
use crate::service::ScanControl;
use parking_lot::Mutex;
use sr_adapters::{EngineError, Extension, ScanEngine};
use std::sync::Arc;

/// Builds a [`ScanControl`] once the host hands over the engine.
///
/// Clones share the registration slot, so a clone kept by the routing layer
/// sees the control the host registered.
#[derive(Clone)]
pub struct ControlExtension<E> {
    config: ControlConfig,
    control: Arc<Mutex<Option<Arc<ScanControl<E>>>>>,
}

impl<E: ScanEngine> ControlExtension<E> {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            control: Arc::new(Mutex::new(None)),
        }
    }

    /// The registered control surface, once the engine is up
    pub fn control(&self) -> Option<Arc<ScanControl<E>>> {
        self.control.lock().clone()
    }
}

impl<E: ScanEngine> Extension<E> for ControlExtension<E> {
    fn name(&self) -> &str {
        "scan-control"
    }

    fn register(&self, engine: E) -> Result<(), EngineError> {
        let mut slot = self.control.lock();
        if slot.is_some() {
            return Err(EngineError::Rejected(
                "scan control already registered".to_string(),
            ));
        }
        *slot = Some(Arc::new(ScanControl::new(engine, self.config.clone())));
        tracing::info!(
            headless = self.config.headless,
            crawl_window_ms = self.config.crawl_window_ms,
            "scan control ready"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
