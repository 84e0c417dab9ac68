// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Event;
use crate::ordering::{filter_events, newest_first, sort_events};

/// Something that happened to the event list, fed into [`EventBoard::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fresh snapshot was fetched from the store.
    Loaded(Vec<Event>),

    /// An event was created.
    Added(Event),

    /// An event was changed in place.
    Updated(Event),

    /// The event with this identifier was removed.
    Deleted(i64),

    /// The search text was edited.
    SearchChanged(String),

    /// Search mode was switched on or off.
    SearchToggled,
}

/// The state behind an event list screen: the mirrored events plus the search box.
///
/// The owner feeds actions in and renders [`EventBoard::visible`] after each one. The events are
/// kept newest first at all times.
#[derive(Debug, Default, Clone)]
pub struct EventBoard {
    events: Vec<Event>,
    search: String,
    searching: bool,
}

impl EventBoard {
    /// Creates a board from a store snapshot.
    pub fn new(events: Vec<Event>) -> Self {
        let mut board = Self::default();
        board.apply(Action::Loaded(events));
        board
    }

    /// Applies an action to the board.
    pub fn apply(&mut self, action: Action) {
        tracing::trace!(?action, "applying action to event board");
        match action {
            Action::Loaded(mut events) => {
                sort_events(&mut events);
                self.events = events;
            }
            Action::Added(event) => {
                self.events.retain(|e| e.id != event.id);
                self.insert_sorted(event);
            }
            Action::Updated(event) => {
                // an update for an event we never saw is dropped, the next load will catch up
                if let Some(pos) = self.events.iter().position(|e| e.id == event.id) {
                    self.events.remove(pos);
                    self.insert_sorted(event);
                }
            }
            Action::Deleted(id) => self.events.retain(|e| e.id != id),
            Action::SearchChanged(search) => self.search = search,
            Action::SearchToggled => {
                self.searching = !self.searching;
                if !self.searching {
                    self.search.clear();
                }
            }
        }
    }

    /// All events, newest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The events to display: newest first, narrowed by the search text while search mode is on.
    ///
    /// Text typed with search mode off is kept but does not filter.
    pub fn visible(&self) -> Vec<&Event> {
        let query = if self.searching { self.search.as_str() } else { "" };
        filter_events(&self.events, query)
    }

    /// Looks up an event by identifier.
    pub fn find(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// The current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Whether search mode is on.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    fn insert_sorted(&mut self, event: Event) {
        let pos = self
            .events
            .partition_point(|e| newest_first(e, &event).is_lt());
        self.events.insert(pos, event);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn event(id: i64, name: &str, month: u32, day: u32) -> Event {
        Event {
            id,
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            notes: None,
            location: String::new(),
        }
    }

    fn visible_ids(board: &EventBoard) -> Vec<i64> {
        board.visible().into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn loads_newest_first() {
        let board = EventBoard::new(vec![
            event(1, "Mid", 5, 15),
            event(2, "Late", 6, 22),
            event(3, "Early", 4, 1),
        ]);
        assert_eq!(visible_ids(&board), vec![2, 1, 3]);
    }

    #[test]
    fn added_events_land_in_order() {
        let mut board = EventBoard::new(vec![event(1, "Mid", 5, 15), event(3, "Early", 4, 1)]);
        board.apply(Action::Added(event(4, "Latest", 7, 1)));
        board.apply(Action::Added(event(5, "Between", 5, 1)));
        assert_eq!(visible_ids(&board), vec![4, 1, 5, 3]);
    }

    #[test]
    fn adding_a_known_id_replaces_it() {
        let mut board = EventBoard::new(vec![event(1, "Mid", 5, 15)]);
        board.apply(Action::Added(event(1, "Moved", 8, 1)));
        assert_eq!(board.events().len(), 1);
        assert_eq!(board.find(1).unwrap().name, "Moved");
    }

    #[test]
    fn updates_move_events_and_keep_ids() {
        let mut board = EventBoard::new(vec![event(1, "A", 5, 15), event(2, "B", 6, 22)]);
        board.apply(Action::Updated(event(1, "A moved", 9, 9)));
        assert_eq!(visible_ids(&board), vec![1, 2]);
        assert_eq!(board.find(1).unwrap().name, "A moved");
    }

    #[test]
    fn updates_for_unknown_events_are_ignored() {
        let mut board = EventBoard::new(vec![event(1, "A", 5, 15)]);
        board.apply(Action::Updated(event(9, "Ghost", 9, 9)));
        assert_eq!(visible_ids(&board), vec![1]);
        assert!(board.find(9).is_none());
    }

    #[test]
    fn deletes_by_id() {
        let mut board = EventBoard::new(vec![event(1, "A", 5, 15), event(2, "B", 6, 22)]);
        board.apply(Action::Deleted(2));
        board.apply(Action::Deleted(42));
        assert_eq!(visible_ids(&board), vec![1]);
    }

    #[test]
    fn search_narrows_the_visible_events() {
        let mut board = EventBoard::new(vec![
            event(1, "Team Meeting", 5, 15),
            event(2, "Birthday", 6, 22),
            event(3, "meetup", 4, 1),
        ]);
        board.apply(Action::SearchToggled);
        assert!(board.is_searching());
        board.apply(Action::SearchChanged("MEET".to_string()));
        assert_eq!(board.search(), "MEET");
        assert_eq!(visible_ids(&board), vec![1, 3]);
        assert_eq!(board.events().len(), 3);
    }

    #[test]
    fn leaving_search_mode_clears_the_text() {
        let mut board = EventBoard::new(vec![event(1, "A", 5, 15), event(2, "B", 6, 22)]);
        board.apply(Action::SearchToggled);
        board.apply(Action::SearchChanged("a".to_string()));
        assert_eq!(visible_ids(&board), vec![1]);

        board.apply(Action::SearchToggled);
        assert!(!board.is_searching());
        assert_eq!(board.search(), "");
        assert_eq!(visible_ids(&board), vec![2, 1]);
    }

    #[test]
    fn search_text_only_filters_in_search_mode() {
        let mut board = EventBoard::new(vec![event(1, "A", 5, 15), event(2, "B", 6, 22)]);
        board.apply(Action::SearchChanged("a".to_string()));
        assert!(!board.is_searching());
        assert_eq!(board.search(), "a");
        assert_eq!(visible_ids(&board), vec![2, 1]);

        board.apply(Action::SearchToggled);
        assert_eq!(visible_ids(&board), vec![1]);
    }
}
