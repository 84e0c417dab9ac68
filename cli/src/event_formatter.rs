// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::{DateTime, Duration, Local};
use colored::Color;
use tminus_core::{Countdown, Event};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(now: DateTime<Local>, columns: Vec<EventColumnKind>) -> Self {
        Self {
            columns: columns
                .into_iter()
                .map(|kind| EventColumn { kind, now })
                .collect(),
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> impl fmt::Display + 'a {
        Table::new(self.format, &self.columns, events)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumnKind {
    Id,
    Moment,
    Countdown,
    Name,
    Notes,
    Location,
}

impl EventColumnKind {
    pub fn compact() -> Vec<Self> {
        vec![Self::Id, Self::Moment, Self::Countdown, Self::Name]
    }

    pub fn verbose() -> Vec<Self> {
        vec![
            Self::Id,
            Self::Moment,
            Self::Countdown,
            Self::Name,
            Self::Location,
            Self::Notes,
        ]
    }

    pub fn columns(verbose: bool) -> Vec<Self> {
        match verbose {
            true => Self::verbose(),
            false => Self::compact(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventColumn {
    kind: EventColumnKind,
    now: DateTime<Local>,
}

impl TableColumn<Event> for EventColumn {
    fn key(&self) -> Cow<'_, str> {
        match self.kind {
            EventColumnKind::Id => "id",
            EventColumnKind::Moment => "moment",
            EventColumnKind::Countdown => "countdown",
            EventColumnKind::Name => "name",
            EventColumnKind::Notes => "notes",
            EventColumnKind::Location => "location",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self.kind {
            EventColumnKind::Id => format!("#{}", event.id).into(),
            EventColumnKind::Moment => event.moment().into(),
            EventColumnKind::Countdown => event.countdown(&self.now).to_string().into(),
            EventColumnKind::Name => event.name.as_str().into(),
            EventColumnKind::Notes => event.notes.as_deref().unwrap_or_default().into(),
            EventColumnKind::Location => event.location.as_str().into(),
        }
    }

    fn json(&self, event: &Event) -> serde_json::Value {
        match self.kind {
            EventColumnKind::Id => event.id.into(),
            EventColumnKind::Notes => event.notes.clone().into(),
            _ => self.format(event).into_owned().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.kind {
            EventColumnKind::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &Event) -> Option<Color> {
        const COLOR_ELAPSED: Option<Color> = Some(Color::BrightBlack);
        const COLOR_SOON: Option<Color> = Some(Color::Yellow);

        match self.kind {
            EventColumnKind::Countdown => match event.countdown(&self.now) {
                Countdown::Elapsed => COLOR_ELAPSED,
                Countdown::Pending(r) if r.total_seconds() < Duration::days(1).num_seconds() => {
                    COLOR_SOON
                }
                Countdown::Pending(_) => None,
            },
            _ => None,
        }
    }
}
