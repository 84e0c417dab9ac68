// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use tminus_core::{Error as CoreError, Event, EventDraft, Tminus};

use crate::arg::{CommonArgs, EventArgs, EventPatchArgs};
use crate::event_formatter::{EventColumnKind, EventFormatter};
use crate::util::OutputFormat;

const NOT_FOUND: &str = "Event not found";

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub name: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub location: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .arg(EventArgs::name(true))
            .arg(EventArgs::date(true))
            .arg(EventArgs::time(true))
            .arg(EventArgs::notes())
            .arg(EventArgs::location())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: EventArgs::get_name(matches).unwrap_or_default(),
            date: EventArgs::get_date(matches).unwrap_or_default(),
            time: EventArgs::get_time(matches).unwrap_or_default(),
            notes: EventArgs::get_notes(matches),
            location: EventArgs::get_location(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, tminus: &mut Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let draft = EventDraft {
            name: self.name,
            date: self.date,
            time: self.time,
            notes: self.notes,
            location: self.location,
        };
        let event = tminus.new_event(draft).await?;
        print_events(tminus, &[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub search: Option<String>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events, newest first")
            .arg(EventArgs::search())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: EventArgs::get_search(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, tminus: &Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = match &self.search {
            Some(query) => tminus.search_events(query).await?,
            None => tminus.list_events().await?,
        };

        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        print_events(tminus, &events, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventShow {
    pub id: i64,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the details of an event")
            .arg(EventArgs::id("show"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub async fn run(self, tminus: &Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event...");
        let Some(event) = get_or_report(tminus, self.id).await? else {
            return Ok(());
        };

        println!("{}", event.name.bold());
        println!("{} {}", label("When:"), event.moment());
        println!("{} {}", label("Countdown:"), tminus.countdown(&event));
        if !event.location.is_empty() {
            println!("{} {}", label("Where:"), event.location);
        }
        if let Some(notes) = &event.notes {
            println!("{} {}", label("Notes:"), notes);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: i64,
    pub patch: EventPatchArgs,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(EventArgs::id("edit"))
            .arg(EventArgs::name(false))
            .arg(EventArgs::date(false))
            .arg(EventArgs::time(false))
            .arg(EventArgs::notes())
            .arg(EventArgs::location())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
            patch: EventPatchArgs::from(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, tminus: &mut Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let patch = self.patch.into_patch()?;
        let event = tminus.update_event(self.id, patch).await?;
        print_events(tminus, &[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDelete {
    pub id: i64,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(EventArgs::id("delete"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub async fn run(self, tminus: &mut Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        tminus.delete_event(self.id).await?;
        println!("Deleted event #{}", self.id);
        Ok(())
    }
}

fn label(text: &str) -> colored::ColoredString {
    format!("{text:>10}").green()
}

/// Looks the event up, printing the not-found state instead of failing when it is missing.
pub async fn get_or_report(tminus: &Tminus, id: i64) -> Result<Option<Event>, Box<dyn Error>> {
    match tminus.get_event(id).await {
        Ok(event) => Ok(Some(event)),
        Err(CoreError::NotFound(_)) => {
            println!("{}", NOT_FOUND.italic());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn print_events(tminus: &Tminus, events: &[Event], output_format: OutputFormat, verbose: bool) {
    let columns = EventColumnKind::columns(verbose);
    let formatter = EventFormatter::new(tminus.now(), columns).with_output_format(output_format);
    print!("{}", formatter.format(events));
}
