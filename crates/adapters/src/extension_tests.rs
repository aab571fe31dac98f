// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::engine::FakeEngine;
use parking_lot::Mutex;
use std::sync::Arc;

struct Recording {
    name: &'static str,
    seen: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
}

impl Extension<FakeEngine> for Recording {
    fn name(&self) -> &str {
        self.name
    }

    fn register(&self, _engine: FakeEngine) -> Result<(), EngineError> {
        self.seen.lock().push(self.name);
        if self.fail {
            return Err(EngineError::Rejected("boom".to_string()));
        }
        Ok(())
    }
}

#[test]
fn registers_in_order_and_continues_past_failures() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut host = ExtensionHost::new();
    for (name, fail) in [("first", false), ("broken", true), ("last", false)] {
        host.add(Recording {
            name,
            seen: Arc::clone(&seen),
            fail,
        });
    }
    assert_eq!(host.len(), 3);

    let failures = host.register_all(&FakeEngine::new());

    assert_eq!(*seen.lock(), vec!["first", "broken", "last"]);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].extension, "broken");
}

#[test]
fn empty_host_registers_nothing() {
    let host: ExtensionHost<FakeEngine> = ExtensionHost::new();
    assert!(host.is_empty());
    assert!(host.register_all(&FakeEngine::new()).is_empty());
}
