// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the control surface

use sr_adapters::EngineError;
use sr_core::{TargetError, UnknownReportFormat};
use thiserror::Error;

/// Errors surfaced to callers of the control surface
#[derive(Debug, Error)]
pub enum ControlError {
    /// Caller input is unusable; fix the request
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Target is valid but not in scope; change the scope first
    #[error("{0} is not in scope; include it in scope before retrying")]
    OutOfScope(String),
    /// The engine call failed; not retried
    #[error(transparent)]
    EngineUnavailable(#[from] EngineError),
    #[error("report file error: {0}")]
    ReportIo(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<TargetError> for ControlError {
    fn from(e: TargetError) -> Self {
        ControlError::InvalidInput(e.to_string())
    }
}

impl From<UnknownReportFormat> for ControlError {
    fn from(e: UnknownReportFormat) -> Self {
        ControlError::InvalidInput(e.to_string())
    }
}

/// Reject empty required string arguments
pub(crate) fn require_non_empty<'a>(name: &str, value: &'a str) -> Result<&'a str, ControlError> {
    if value.is_empty() {
        return Err(ControlError::InvalidInput(format!(
            "the '{name}' parameter must not be null or empty"
        )));
    }
    Ok(value)
}
