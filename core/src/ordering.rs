// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Ordering and filtering of event snapshots.
//!
//! All functions here are pure and work on borrowed snapshots, so they can be called from any
//! thread without synchronization.

use std::cmp::Ordering;

use crate::Event;

/// Newest-first ordering: later date and time first, ties broken by ascending identifier.
pub fn newest_first(a: &Event, b: &Event) -> Ordering {
    b.naive_datetime()
        .cmp(&a.naive_datetime())
        .then_with(|| a.id.cmp(&b.id))
}

/// Sorts events in place, newest first.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(newest_first);
}

/// Whether the name of the event contains `query`, ignoring case.
///
/// A blank query matches every event.
pub fn matches_query(event: &Event, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || event.name.to_lowercase().contains(&query.to_lowercase())
}

/// Keeps the events whose name contains `query`, ignoring case, preserving their order.
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| matches_query(e, query)).collect()
}

/// Sorts a snapshot newest first, then keeps the events matching `query`.
pub fn arrange(events: &[Event], query: &str) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sort_events(&mut sorted);
    sorted.retain(|e| matches_query(e, query));
    sorted
}
