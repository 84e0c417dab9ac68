// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::countdown::Countdown;
use crate::datetime::{format_date, format_time, parse_date, parse_time, resolve_instant};
use crate::{Error, Result};

/// A user-created event to count down to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The unique identifier, assigned by the store and stable afterwards.
    pub id: i64,

    /// The name of the event, never blank.
    pub name: String,

    /// The calendar date of the event.
    pub date: NaiveDate,

    /// The time of day of the event.
    pub time: NaiveTime,

    /// Free-form notes, if any.
    pub notes: Option<String>,

    /// Where the event takes place, possibly empty.
    pub location: String,
}

impl Event {
    /// The wall-clock date and time of the event.
    pub fn naive_datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }

    /// The absolute instant of the event, interpreting its wall-clock time in `tz`.
    pub fn instant_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        resolve_instant(tz, self.naive_datetime())
    }

    /// The absolute instant of the event in the local timezone.
    pub fn instant(&self) -> DateTime<Local> {
        self.instant_in(&Local)
    }

    /// The countdown from `now` to this event, in the timezone of `now`.
    pub fn countdown<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Countdown {
        Countdown::between(now, &self.instant_in(&now.timezone()))
    }

    /// The date and time as the user typed them, `MM/DD/YYYY HH:MM`.
    pub fn moment(&self) -> String {
        format!("{} {}", format_date(self.date), format_time(self.time))
    }
}

/// A validated event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
    pub location: String,
}

impl NewEvent {
    /// Attaches the identifier handed out by the store.
    pub fn with_id(self, id: i64) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            notes: self.notes,
            location: self.location,
        }
    }
}

/// Raw form input for a new event.
#[derive(Debug, Default, Clone)]
pub struct EventDraft {
    /// The name of the event, required.
    pub name: String,

    /// The date in `MM/DD/YYYY` format, required.
    pub date: String,

    /// The time in `HH:MM` format, required.
    pub time: String,

    /// Optional notes.
    pub notes: Option<String>,

    /// Optional location.
    pub location: Option<String>,
}

impl EventDraft {
    /// Checks the mandatory fields and parses the date and time.
    pub fn validate(self) -> Result<NewEvent> {
        let name = required("name", &self.name)?.to_string();
        let date = parse_date(required("date", &self.date)?)?;
        let time = parse_time(required("time", &self.time)?)?;
        Ok(NewEvent {
            name,
            date,
            time,
            notes: normalize_notes(self.notes),
            location: self.location.unwrap_or_default(),
        })
    }
}

/// Patch for an event, allowing partial updates. The identifier never changes.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    /// The new name, if set.
    pub name: Option<String>,

    /// The new date, if set.
    pub date: Option<NaiveDate>,

    /// The new time, if set.
    pub time: Option<NaiveTime>,

    /// The new notes, if set; `Some(None)` clears them.
    pub notes: Option<Option<String>>,

    /// The new location, if set.
    pub location: Option<String>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.notes.is_none()
            && self.location.is_none()
    }

    /// Applies the patch to a mutable event, modifying it in place.
    pub fn apply_to<'a>(&self, e: &'a mut Event) -> Result<&'a mut Event> {
        if let Some(name) = &self.name {
            e.name = required("name", name)?.to_string();
        }

        if let Some(date) = self.date {
            e.date = date;
        }

        if let Some(time) = self.time {
            e.time = time;
        }

        if let Some(notes) = &self.notes {
            e.notes = normalize_notes(notes.clone());
        }

        if let Some(location) = &self.location {
            e.location = location.clone();
        }

        Ok(e)
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    match value.trim() {
        "" => Err(Error::EmptyField(field)),
        trimmed => Ok(trimmed),
    }
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}
