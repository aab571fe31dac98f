// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sr-core: shared data types for the scan relay

pub mod clock;
pub mod id;
pub mod issue;
pub mod message;
pub mod progress;
pub mod report;
pub mod target;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::TicketId;
pub use issue::{Confidence, ScanIssue, Severity};
pub use message::HttpMessage;
pub use progress::{CrawlProgress, Percent, ScanProgress};
pub use report::{ReportFormat, UnknownReportFormat, Versions};
pub use target::{
    default_port, matches_prefix, parse_url, DispatchKey, NormalizedUrl, ScanTarget, TargetError,
};
pub use url::Url;
