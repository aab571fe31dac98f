// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for control tests

use parking_lot::Mutex;
use sr_adapters::{FakeEngine, ScanEngine};
use sr_core::parse_url;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

pub const BASE: &str = "https://example.com/app";

/// Fake engine with `include` in scope and `exclude` carved out of it
pub async fn scoped_engine(include: &[&str], exclude: &[&str]) -> FakeEngine {
    let engine = FakeEngine::new();
    for url in include {
        engine
            .include_in_scope(&parse_url(url).unwrap())
            .await
            .unwrap();
    }
    for url in exclude {
        engine
            .exclude_from_scope(&parse_url(url).unwrap())
            .await
            .unwrap();
    }
    engine.clear_calls();
    engine
}

/// A writer that captures log output for testing
#[derive(Clone, Default)]
pub struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.logs.lock()).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run an async body on a fresh runtime with tracing captured at DEBUG
pub fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}
