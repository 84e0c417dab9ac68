// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keeping an [`EventBoard`] in step with store mutations.

use tminus_core::{Action, EventBoard, EventPatch};

use crate::common::{memory_tminus, test_event_draft_at};

#[tokio::test]
async fn board_follows_mutations() {
    // Arrange
    let tminus = memory_tminus();
    let mut board = tminus.board().await.unwrap();
    assert!(board.events().is_empty());

    // Act - add
    let concert = tminus
        .new_event(test_event_draft_at("Concert", "06/22/2024", "20:00"))
        .await
        .unwrap();
    board.apply(Action::Added(concert.clone()));
    let meeting = tminus
        .new_event(test_event_draft_at("Meeting", "05/15/2024", "09:00"))
        .await
        .unwrap();
    board.apply(Action::Added(meeting.clone()));

    // Assert
    let ids: Vec<i64> = board.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![concert.id, meeting.id]);

    // Act - update moves the event
    let patch = EventPatch {
        date: Some(chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()),
        ..Default::default()
    };
    let moved = tminus.update_event(meeting.id, patch).await.unwrap();
    board.apply(Action::Updated(moved.clone()));

    // Assert
    let ids: Vec<i64> = board.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![meeting.id, concert.id]);

    // Act - delete
    tminus.delete_event(concert.id).await.unwrap();
    board.apply(Action::Deleted(concert.id));

    // Assert - the board matches a fresh load
    let fresh = tminus.board().await.unwrap();
    assert_eq!(board.events(), fresh.events());
    assert!(board.find(concert.id).is_none());
    assert_eq!(board.find(meeting.id), Some(&moved));
}

#[tokio::test]
async fn board_search_mode() {
    // Arrange
    let tminus = memory_tminus();
    for (name, date) in [("Meeting", "05/15/2024"), ("Concert", "06/22/2024")] {
        tminus
            .new_event(test_event_draft_at(name, date, "10:00"))
            .await
            .unwrap();
    }
    let mut board = EventBoard::new(tminus.list_events().await.unwrap());

    // Act
    board.apply(Action::SearchToggled);
    board.apply(Action::SearchChanged("meet".to_string()));

    // Assert
    assert!(board.is_searching());
    let names: Vec<&str> = board.visible().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Meeting"]);

    // Act - leaving search mode restores the full list
    board.apply(Action::SearchToggled);

    // Assert
    assert!(!board.is_searching());
    assert_eq!(board.search(), "");
    assert_eq!(board.visible().len(), 2);
}
