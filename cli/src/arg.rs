// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use tminus_core::{EventPatch, parse_date, parse_time};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id(action: &str) -> Arg {
        arg!(id: <ID>)
            .help(format!("The id of the event to {action}"))
            .value_parser(value_parser!(i64))
    }

    pub fn get_id(matches: &ArgMatches) -> i64 {
        match matches.get_one::<i64>("id") {
            Some(id) => *id,
            None => unreachable!("id is required"),
        }
    }

    pub fn name(positional: bool) -> Arg {
        if positional {
            arg!(name: <NAME> "Name of the event")
        } else {
            arg!(name: -n --name <NAME> "Name of the event")
        }
    }

    pub fn get_name(matches: &ArgMatches) -> Option<String> {
        matches.get_one("name").cloned()
    }

    pub fn date(required: bool) -> Arg {
        arg!(--date <DATE> "Date of the event, as MM/DD/YYYY").required(required)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn time(required: bool) -> Arg {
        arg!(--time <TIME> "Time of the event, as HH:MM in 24-hour clock").required(required)
    }

    pub fn get_time(matches: &ArgMatches) -> Option<String> {
        matches.get_one("time").cloned()
    }

    pub fn notes() -> Arg {
        arg!(--notes <NOTES> "Notes of the event, an empty value clears them")
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }

    pub fn location() -> Arg {
        arg!(--location <LOCATION> "Location of the event")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn search() -> Arg {
        arg!(-s --search <QUERY> "Only show events whose name contains the query, ignoring case")
    }

    pub fn get_search(matches: &ArgMatches) -> Option<String> {
        matches.get_one("search").cloned()
    }
}

/// Raw edit flags, parsed into a patch once the command runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventPatchArgs {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub location: Option<String>,
}

impl EventPatchArgs {
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: EventArgs::get_name(matches),
            date: EventArgs::get_date(matches),
            time: EventArgs::get_time(matches),
            notes: EventArgs::get_notes(matches),
            location: EventArgs::get_location(matches),
        }
    }

    pub fn into_patch(self) -> tminus_core::Result<EventPatch> {
        Ok(EventPatch {
            name: self.name,
            date: self.date.as_deref().map(parse_date).transpose()?,
            time: self.time.as_deref().map(parse_time).transpose()?,
            notes: self.notes.map(|n| (!n.trim().is_empty()).then_some(n)),
            location: self.location,
        })
    }
}
