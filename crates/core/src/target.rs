// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target URLs: parsing, normalization, and dispatch keys.
//!
//! Two URLs that differ only by an explicit default port
//! (`https://host:443/x` vs `https://host/x`) name the same unit of work and
//! collapse to the same [`DispatchKey`]. Userinfo and fragments never reach
//! the engine and are dropped during normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors from turning caller input into a target URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("url must not be empty")]
    Empty,
    #[error("malformed url '{url}': {reason}")]
    Malformed { url: String, reason: String },
    #[error("unsupported scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
    #[error("url has no host: {0}")]
    MissingHost(String),
}

/// Parse caller input into an absolute http(s) URL.
pub fn parse_url(input: &str) -> Result<Url, TargetError> {
    if input.is_empty() {
        return Err(TargetError::Empty);
    }
    let url = Url::parse(input).map_err(|e| TargetError::Malformed {
        url: input.to_string(),
        reason: e.to_string(),
    })?;
    if default_port(url.scheme()).is_none() {
        return Err(TargetError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetError::MissingHost(input.to_string()));
    }
    Ok(url)
}

/// Default port for the schemes the engine can scan
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// A target URL accepted by [`parse_url`] and put in canonical form.
///
/// Canonical means no userinfo, no fragment, and no explicit default port.
/// The only way to build one is [`NormalizedUrl::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(Url);

impl NormalizedUrl {
    pub fn parse(input: &str) -> Result<Self, TargetError> {
        parse_url(input).map(|url| Self(normalize(url)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::ops::Deref for NormalizedUrl {
    type Target = Url;

    fn deref(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// `url` came from `parse_url`: it has a host and can be a base, so none of
/// these setters can fail.
fn normalize(mut url: Url) -> Url {
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.set_fragment(None);
    if url.port().is_some() && url.port() == default_port(url.scheme()) {
        let _ = url.set_port(None);
    }
    url
}

/// Case-sensitive textual prefix match used by every URL-prefix filter
pub fn matches_prefix(url: &str, prefix: &str) -> bool {
    url.starts_with(prefix)
}

/// Key identifying one submitted unit of work.
///
/// Always built from a normalized URL, so equal keys mean equal targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispatchKey(String);

impl DispatchKey {
    pub fn from_url(url: &NormalizedUrl) -> Self {
        Self(url.as_str().to_string())
    }

    pub fn parse(input: &str) -> Result<Self, TargetError> {
        NormalizedUrl::parse(input).map(|url| Self::from_url(&url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for DispatchKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Connection parameters the engine needs to replay a captured request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanTarget {
    pub host: String,
    /// Explicit port if present, else the scheme default
    pub port: u16,
    pub use_tls: bool,
}

impl ScanTarget {
    pub fn from_url(url: &Url) -> Result<Self, TargetError> {
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| TargetError::MissingHost(url.to_string()))?;
        let port = url
            .port()
            .or_else(|| default_port(url.scheme()))
            .ok_or_else(|| TargetError::UnsupportedScheme(url.scheme().to_string()))?;
        Ok(Self {
            host: host.to_string(),
            port,
            use_tls: url.scheme().eq_ignore_ascii_case("https"),
        })
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
