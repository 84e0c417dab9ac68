// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{DateTime, Local};
use clap::{ArgMatches, Command};
use colored::Colorize;
use tminus_core::{Event, Tminus};

use crate::event_formatter::{EventColumnKind, EventFormatter};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the dashboard, with upcoming and past events")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the dashboard with countdowns as of now.
    pub async fn run(self, tminus: &Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let events = tminus.list_events().await?;
        let (upcoming, past) = split_upcoming(events, &tminus.now());

        let formatter = EventFormatter::new(tminus.now(), EventColumnKind::compact());

        println!("⏳ {}", "Upcoming".bold());
        if upcoming.is_empty() {
            println!("{}", "No upcoming events".italic());
        } else {
            print!("{}", formatter.format(&upcoming));
        }

        if !past.is_empty() {
            println!();
            println!("🗓️ {}", "Past".bold());
            print!("{}", formatter.format(&past));
        }
        Ok(())
    }
}

/// Splits newest-first events into those still ahead and those already passed, keeping order.
fn split_upcoming(events: Vec<Event>, now: &DateTime<Local>) -> (Vec<Event>, Vec<Event>) {
    events
        .into_iter()
        .partition(|event| !event.countdown(now).is_elapsed())
}
