// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extension registration
//!
//! Several extensions can share one engine process. Each registers a
//! callback set at startup; the host hands every registered extension a
//! handle to the engine once it is up.

use crate::engine::{EngineError, ScanEngine};

/// A component that wants access to the engine once the host starts
pub trait Extension<E: ScanEngine>: Send + Sync {
    /// Human-readable name used in logs
    fn name(&self) -> &str;

    /// Receive the engine handle
    fn register(&self, engine: E) -> Result<(), EngineError>;
}

/// Extension that failed to register
#[derive(Debug)]
pub struct RegistrationFailure {
    pub extension: String,
    pub error: EngineError,
}

/// Collects extensions and registers them against an engine
pub struct ExtensionHost<E: ScanEngine> {
    extensions: Vec<Box<dyn Extension<E>>>,
}

impl<E: ScanEngine> Default for ExtensionHost<E> {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }
}

impl<E: ScanEngine> ExtensionHost<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, extension: impl Extension<E> + 'static) -> &mut Self {
        self.extensions.push(Box::new(extension));
        self
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Register every extension in insertion order.
    ///
    /// A failing extension does not stop the rest; failures are returned.
    pub fn register_all(&self, engine: &E) -> Vec<RegistrationFailure> {
        let mut failures = Vec::new();
        for extension in &self.extensions {
            match extension.register(engine.clone()) {
                Ok(()) => tracing::info!(extension = extension.name(), "extension registered"),
                Err(error) => {
                    tracing::warn!(
                        extension = extension.name(),
                        %error,
                        "extension failed to register"
                    );
                    failures.push(RegistrationFailure {
                        extension: extension.name().to_string(),
                        error,
                    });
                }
            }
        }
        failures
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
