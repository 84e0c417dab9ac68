// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
    offset::LocalResult,
};

use crate::{Error, Result};

/// Date format accepted from forms and command-line input.
pub const INPUT_FORMAT_DATE: &str = "%m/%d/%Y";
/// Time format accepted from forms and command-line input, 24-hour clock.
pub const INPUT_FORMAT_TIME: &str = "%H:%M";

/// NOTE: Used for storing in the database, so it should be stable across different runs.
pub(crate) const STABLE_FORMAT_DATE: &str = "%Y-%m-%d";
pub(crate) const STABLE_FORMAT_TIME: &str = "%H:%M";

/// Parses a date in `MM/DD/YYYY` format.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, INPUT_FORMAT_DATE).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parses a time of day in `HH:MM` format.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, INPUT_FORMAT_TIME).map_err(|_| Error::InvalidTime(s.to_string()))
}

/// Formats a date back into the `MM/DD/YYYY` input format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT_DATE).to_string()
}

/// Formats a time back into the `HH:MM` input format.
pub fn format_time(time: NaiveTime) -> String {
    time.format(INPUT_FORMAT_TIME).to_string()
}

pub(crate) fn format_stable_date(date: NaiveDate) -> String {
    date.format(STABLE_FORMAT_DATE).to_string()
}

pub(crate) fn format_stable_time(time: NaiveTime) -> String {
    time.format(STABLE_FORMAT_TIME).to_string()
}

pub(crate) fn parse_stable_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, STABLE_FORMAT_DATE).ok()
}

pub(crate) fn parse_stable_time(s: &str) -> Option<NaiveTime> {
    // older rows may carry seconds
    NaiveTime::parse_from_str(s, STABLE_FORMAT_TIME)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Converts a wall-clock date and time into an absolute instant in `tz`, handles local time
/// ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time skipped by a DST transition): keeps the offset in force before the
///   transition, so the instant lands after the gap, e.g. 02:30 becomes 03:30 when clocks spring
///   forward at 02:00. Falls back to a UTC combination if no earlier offset can be found.
///
/// The result never goes backwards as `naive` increases, so ordering by wall-clock time and by
/// instant agree.
pub fn resolve_instant<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(a, b) => {
            tracing::debug!(%naive, "ambiguous local time, picking earliest");
            if a <= b { a } else { b }
        }
        LocalResult::None => match offset_before_gap(tz, naive) {
            Some(utc) => {
                tracing::debug!(%naive, "nonexistent local time, shifting past the gap");
                tz.from_utc_datetime(&utc)
            }
            None => {
                tracing::warn!(%naive, "nonexistent local time, falling back to UTC");
                Utc.from_utc_datetime(&naive).with_timezone(tz)
            }
        },
    }
}

/// The UTC time of `naive` read with the last offset in force before it, looking back up to a day.
fn offset_before_gap<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<NaiveDateTime> {
    let offset = (1..=24)
        .filter_map(|h| naive.checked_sub_signed(Duration::hours(h)))
        .find_map(|earlier| tz.offset_from_local_datetime(&earlier).earliest())?;
    naive.checked_sub_signed(Duration::seconds(offset.fix().local_minus_utc().into()))
}

/// A US-eastern style zone that springs forward from UTC-5 to UTC-4 at 2024-03-10 02:00 local.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpringForward;

#[cfg(test)]
impl SpringForward {
    const STANDARD: i32 = -5 * 3600;
    const DAYLIGHT: i32 = -4 * 3600;

    fn switch_utc() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    }

    fn offset(secs: i32) -> chrono::FixedOffset {
        chrono::FixedOffset::east_opt(secs).unwrap()
    }
}

#[cfg(test)]
impl TimeZone for SpringForward {
    type Offset = chrono::FixedOffset;

    fn from_offset(_: &Self::Offset) -> Self {
        SpringForward
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<Self::Offset> {
        self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<Self::Offset> {
        let gap_start = Self::switch_utc() + Duration::seconds(Self::STANDARD.into());
        let gap_end = Self::switch_utc() + Duration::seconds(Self::DAYLIGHT.into());
        if *local < gap_start {
            LocalResult::Single(Self::offset(Self::STANDARD))
        } else if *local < gap_end {
            LocalResult::None
        } else {
            LocalResult::Single(Self::offset(Self::DAYLIGHT))
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> Self::Offset {
        self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> Self::Offset {
        if *utc < Self::switch_utc() {
            Self::offset(Self::STANDARD)
        } else {
            Self::offset(Self::DAYLIGHT)
        }
    }
}
