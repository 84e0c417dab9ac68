// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.

use chrono::{NaiveDate, NaiveTime};

use tminus_core::{Error, EventDraft, EventPatch, Tminus};

use crate::common::{
    assert_event_matches_draft, assert_names, setup_temp_dirs, test_config, test_event_draft,
    test_event_draft_at,
};

#[tokio::test]
async fn event_lifecycle_create_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let tminus = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let draft = EventDraft {
        notes: Some("Bring slides".to_string()),
        location: Some("Room 4".to_string()),
        ..test_event_draft("Team Meeting")
    };

    // Act
    let event = tminus.new_event(draft.clone()).await.unwrap();

    // Assert - verify event created
    assert_event_matches_draft(&event, &draft);
    assert_eq!(event.notes.as_deref(), Some("Bring slides"));
    assert!(temp_dirs.db_path().exists());

    // Assert - verify database entry via retrieval
    let retrieved = tminus.get_event(event.id).await.unwrap();
    assert_eq!(retrieved, event);
}

#[tokio::test]
async fn event_lifecycle_update_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let tminus = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let event = tminus
        .new_event(EventDraft {
            notes: Some("draft notes".to_string()),
            ..test_event_draft("Original Title")
        })
        .await
        .unwrap();

    // Act - update event
    let patch = EventPatch {
        name: Some("Updated Title".to_string()),
        date: Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
        time: Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap()),
        notes: Some(None),
        location: Some("Cafe".to_string()),
    };
    let updated = tminus.update_event(event.id, patch).await.unwrap();

    // Assert
    assert_eq!(updated.id, event.id);
    assert_eq!(updated.name, "Updated Title");
    assert_eq!(updated.moment(), "07/01/2024 09:30");
    assert_eq!(updated.notes, None);
    assert_eq!(updated.location, "Cafe");
    assert_eq!(tminus.get_event(event.id).await.unwrap(), updated);
}

#[tokio::test]
async fn event_lifecycle_update_rejects_blank_name() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let tminus = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let event = tminus.new_event(test_event_draft("Keep Me")).await.unwrap();

    // Act
    let patch = EventPatch {
        name: Some("   ".to_string()),
        ..Default::default()
    };
    let result = tminus.update_event(event.id, patch).await;

    // Assert - nothing saved
    assert!(matches!(result, Err(Error::EmptyField("name"))));
    assert_eq!(tminus.get_event(event.id).await.unwrap().name, "Keep Me");
}

#[tokio::test]
async fn event_lifecycle_delete_flow() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let tminus = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let keep = tminus.new_event(test_event_draft("Keep")).await.unwrap();
    let doomed = tminus.new_event(test_event_draft("Doomed")).await.unwrap();

    // Act
    tminus.delete_event(doomed.id).await.unwrap();

    // Assert
    assert!(matches!(
        tminus.get_event(doomed.id).await,
        Err(Error::NotFound(id)) if id == doomed.id
    ));
    assert!(matches!(
        tminus.delete_event(doomed.id).await,
        Err(Error::NotFound(_))
    ));
    let events = tminus.list_events().await.unwrap();
    assert_eq!(events, vec![keep]);
}

#[tokio::test]
async fn event_lifecycle_list_and_search_newest_first() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let tminus = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    for (name, date) in [
        ("Team Meeting", "05/15/2024"),
        ("Concert", "06/22/2024"),
        ("Dentist", "04/01/2024"),
        ("Meeting notes review", "04/01/2025"),
    ] {
        tminus
            .new_event(test_event_draft_at(name, date, "10:00"))
            .await
            .unwrap();
    }

    // Act
    let all = tminus.list_events().await.unwrap();
    let meetings = tminus.search_events("MEET").await.unwrap();
    let blank = tminus.search_events("   ").await.unwrap();
    let none = tminus.search_events("xyz").await.unwrap();

    // Assert
    assert_names(
        &all,
        &["Meeting notes review", "Concert", "Team Meeting", "Dentist"],
    );
    assert_names(&meetings, &["Meeting notes review", "Team Meeting"]);
    assert_eq!(blank, all);
    assert!(none.is_empty());
}

#[tokio::test]
async fn event_lifecycle_invalid_input_is_not_saved() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let tminus = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();

    // Act
    let bad_date = tminus
        .new_event(test_event_draft_at("Party", "13/45/2024", "10:00"))
        .await;
    let bad_time = tminus
        .new_event(test_event_draft_at("Party", "05/15/2024", "25:00"))
        .await;
    let no_time = tminus
        .new_event(test_event_draft_at("Party", "05/15/2024", ""))
        .await;

    // Assert
    assert!(matches!(bad_date, Err(Error::InvalidDate(_))));
    assert!(matches!(bad_time, Err(Error::InvalidTime(_))));
    assert!(matches!(no_time, Err(Error::EmptyField("time"))));
    assert!(tminus.list_events().await.unwrap().is_empty());
}
