// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use tminus_core::{Event, EventDraft};

/// Asserts that an event carries the values of the draft it was created from.
///
/// # Panics
///
/// Panics if any field doesn't match the expected value.
pub fn assert_event_matches_draft(event: &Event, draft: &EventDraft) {
    assert_eq!(event.name, draft.name.trim(), "Name mismatch");
    assert_eq!(
        event.date.format("%m/%d/%Y").to_string(),
        draft.date.trim(),
        "Date mismatch"
    );
    assert_eq!(
        event.time.format("%H:%M").to_string(),
        draft.time.trim(),
        "Time mismatch"
    );
    assert_eq!(
        event.location,
        draft.location.clone().unwrap_or_default(),
        "Location mismatch"
    );
}

/// Asserts the names of the events, in order.
///
/// # Panics
///
/// Panics if the names differ.
pub fn assert_names(events: &[Event], expected: &[&str]) {
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, expected, "Event names mismatch");
}
