// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration test for the common module.

mod common;

use common::{setup_temp_dirs, test_config, test_event_draft};

#[tokio::test]
async fn common_module_temp_dirs_work() {
    let dirs = setup_temp_dirs().await.unwrap();
    assert!(dirs.state_dir.is_dir());
    assert!(!dirs.db_path().exists());
}

#[tokio::test]
async fn common_module_fixtures_work() {
    let dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&dirs.state_dir);
    assert_eq!(config.state_dir.as_deref(), Some(dirs.state_dir.as_path()));
}

#[test]
fn common_module_event_draft_works() {
    let draft = test_event_draft("Test Event");
    assert_eq!(draft.name, "Test Event");
    assert!(draft.validate().is_ok());
}
