// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report formats and version information

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid report format '{0}' (valid values: HTML, XML)")]
pub struct UnknownReportFormat(pub String);

/// Output format of a generated scan report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    #[default]
    Html,
    Xml,
}

impl ReportFormat {
    /// Name the engine expects, also used as the file extension
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Html => "HTML",
            ReportFormat::Xml => "XML",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `HTML` / `XML`
impl FromStr for ReportFormat {
    type Err = UnknownReportFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTML" => Ok(ReportFormat::Html),
            "XML" => Ok(ReportFormat::Xml),
            other => Err(UnknownReportFormat(other.to_string())),
        }
    }
}

/// Versions of the engine and of this control layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versions {
    pub engine_version: String,
    pub extension_version: String,
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
