// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scanner findings

use serde::{Deserialize, Serialize};
use std::fmt;

/// How bad a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "False positive")]
    FalsePositive,
    Information,
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::FalsePositive => "False positive",
            Severity::Information => "Information",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        })
    }
}

/// How sure the engine is about a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Certain,
    Firm,
    Tentative,
}

/// One issue reported by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssue {
    pub url: String,
    pub name: String,
    pub issue_type: u32,
    pub severity: Severity,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_detail: Option<String>,
}

impl ScanIssue {
    pub fn new(url: impl Into<String>, name: impl Into<String>, severity: Severity) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            issue_type: 0,
            severity,
            confidence: Confidence::Firm,
            issue_detail: None,
            remediation_detail: None,
        }
    }
}
