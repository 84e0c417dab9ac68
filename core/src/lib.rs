// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Countdown and ordering engine behind tminus.

mod board;
mod config;
mod countdown;
mod datetime;
mod error;
mod event;
mod localdb;
mod ordering;
mod store;
mod tminus;

pub use crate::board::{Action, EventBoard};
pub use crate::config::{APP_NAME, Config, ConfigTick, get_config_dir};
pub use crate::countdown::{Countdown, CountdownClock, ELAPSED_TEXT, Remaining};
pub use crate::datetime::{
    INPUT_FORMAT_DATE, INPUT_FORMAT_TIME, format_date, format_time, parse_date, parse_time,
    resolve_instant,
};
pub use crate::error::{Error, Result};
pub use crate::event::{Event, EventDraft, EventPatch, NewEvent};
pub use crate::localdb::LocalDb;
pub use crate::ordering::{arrange, filter_events, matches_query, newest_first, sort_events};
pub use crate::store::{EventStore, MemoryStore};
pub use crate::tminus::Tminus;
