// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

/// Temporary state directory, removed on drop.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory for database files.
    pub state_dir: PathBuf,

    _base: tempfile::TempDir,
}

impl TempDirs {
    /// Creates a new temporary state directory for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let state_dir = base.path().join("state");
        tokio::fs::create_dir_all(&state_dir).await?;
        Ok(Self {
            state_dir,
            _base: base,
        })
    }

    /// The path of the event database inside the state directory.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.state_dir.join("tminus.db")
    }
}

/// Sets up temporary directories for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}
