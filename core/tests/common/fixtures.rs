// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;
use std::sync::Arc;

use tminus_core::{Config, EventDraft, MemoryStore, Tminus};

/// Creates a test configuration pointing at the given state directory.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    }
}

/// Creates a draft for an event at 14:00 on May 15th, 2024.
#[must_use]
pub fn test_event_draft(name: &str) -> EventDraft {
    test_event_draft_at(name, "05/15/2024", "14:00")
}

/// Creates a draft for an event at the given date and time.
#[must_use]
pub fn test_event_draft_at(name: &str, date: &str, time: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        notes: None,
        location: None,
    }
}

/// Creates an instance backed by an in-memory store.
#[must_use]
pub fn memory_tminus() -> Tminus {
    Tminus::with_store(Config::default(), Arc::new(MemoryStore::new()))
}
