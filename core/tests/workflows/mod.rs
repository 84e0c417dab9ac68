// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the tminus-core crate.
//!
//! These tests drive the [`tminus_core::Tminus`] facade against both the SQLite database and the
//! in-memory store.

mod board_sync;
mod event_lifecycle;
mod persistence;
