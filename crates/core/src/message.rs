// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured HTTP request/response pairs (site map and proxy history entries)

use serde::{Deserialize, Serialize};

/// One captured request, with its response if the engine saw one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpMessage {
    /// Absolute URL as stored by the engine (not normalized)
    pub url: String,
    pub request: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl HttpMessage {
    pub fn new(url: impl Into<String>, request: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            request: request.into(),
            response: None,
            status_code: None,
            comment: None,
            highlight: None,
        }
    }

    pub fn with_response(mut self, status_code: u16, response: impl Into<Vec<u8>>) -> Self {
        self.status_code = Some(status_code);
        self.response = Some(response.into());
        self
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }
}
