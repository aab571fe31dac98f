// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sr-control: job tracking and scope-filtered dispatch over a scan engine

pub mod config;
pub mod crawl;
pub mod dispatch;
mod env;
pub mod error;
pub mod extension;
pub mod facade;
pub mod registry;
pub mod scope;
pub mod service;

#[cfg(test)]
mod test_helpers;

pub use config::{ControlConfig, DEFAULT_CRAWL_WINDOW_MS};
pub use crawl::{CrawlBaseline, CrawlTracker, CRAWL_IN_PROGRESS};
pub use dispatch::{DispatchOutcome, DispatchSummary, ScanDispatcher, ScanMode};
pub use error::ControlError;
pub use extension::ControlExtension;
pub use facade::ReportFacade;
pub use registry::JobRegistry;
pub use scope::ScopePredicate;
pub use service::ScanControl;
