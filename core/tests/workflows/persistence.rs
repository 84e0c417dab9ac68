// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Events survive closing and reopening the database.

use tminus_core::{Config, Tminus};

use crate::common::{assert_names, setup_temp_dirs, test_config, test_event_draft_at};

#[tokio::test]
async fn persistence_survives_reopen() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let first = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let created = first
        .new_event(test_event_draft_at("Launch", "12/31/2030", "23:59"))
        .await
        .unwrap();
    first.close().await.unwrap();

    // Act
    let second = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let events = second.list_events().await.unwrap();

    // Assert
    assert_eq!(events, vec![created]);
    second.close().await.unwrap();
}

#[tokio::test]
async fn persistence_ids_are_not_reused_after_reopen() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let first = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let a = first
        .new_event(test_event_draft_at("A", "01/01/2030", "00:00"))
        .await
        .unwrap();
    first.delete_event(a.id).await.unwrap();
    first.close().await.unwrap();

    // Act
    let second = Tminus::new(test_config(&temp_dirs.state_dir)).await.unwrap();
    let b = second
        .new_event(test_event_draft_at("B", "01/01/2030", "00:00"))
        .await
        .unwrap();

    // Assert
    assert!(b.id > a.id);
}

#[tokio::test]
async fn persistence_creates_missing_state_dir() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let nested = temp_dirs.state_dir.join("nested").join("deeper");
    let config = Config {
        state_dir: Some(nested.clone()),
        ..Default::default()
    };

    // Act
    let tminus = Tminus::new(config).await.unwrap();
    tminus
        .new_event(test_event_draft_at("Nested", "01/01/2030", "00:00"))
        .await
        .unwrap();

    // Assert
    assert!(nested.join("tminus.db").exists());
    assert_names(&tminus.list_events().await.unwrap(), &["Nested"]);
}
