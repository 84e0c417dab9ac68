// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{DateTime, TimeZone};

/// Text shown once the target moment is no longer in the future.
pub const ELAPSED_TEXT: &str = "Event has passed";

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Time left until an event, broken down into whole units.
///
/// Each unit is truncated toward zero, so `hours` is always in `0..24`, and `minutes` and
/// `seconds` in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining {
    /// Whole days left.
    pub days: i64,

    /// Hours left after the days, `0..24`.
    pub hours: u32,

    /// Minutes left after the hours, `0..60`.
    pub minutes: u32,

    /// Seconds left after the minutes, `0..60`.
    pub seconds: u32,
}

impl Remaining {
    /// Breaks a non-negative number of seconds into days, hours, minutes and seconds.
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (total % SECONDS_PER_MINUTE) as u32,
        }
    }

    /// The number of seconds this breakdown represents.
    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + i64::from(self.hours) * SECONDS_PER_HOUR
            + i64::from(self.minutes) * SECONDS_PER_MINUTE
            + i64::from(self.seconds)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} Days {:02} Hours {:02} Minutes {:02} Seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// The state of a countdown: still running, or over for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The target lies in the future.
    Pending(Remaining),

    /// The target is now or in the past. Terminal.
    Elapsed,
}

impl Countdown {
    /// Computes the countdown from `now` to `target`.
    pub fn between<Tz1, Tz2>(now: &DateTime<Tz1>, target: &DateTime<Tz2>) -> Self
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        Self::from_millis(target.timestamp_millis() - now.timestamp_millis())
    }

    /// Computes the countdown for a signed span of milliseconds, `target - now`.
    pub fn from_millis(delta: i64) -> Self {
        if delta > 0 {
            Countdown::Pending(Remaining::from_seconds(delta / 1000))
        } else {
            Countdown::Elapsed
        }
    }

    /// Whether the countdown reached its terminal state.
    pub fn is_elapsed(&self) -> bool {
        matches!(self, Countdown::Elapsed)
    }

    /// The remaining time, if any.
    pub fn remaining(&self) -> Option<Remaining> {
        match self {
            Countdown::Pending(r) => Some(*r),
            Countdown::Elapsed => None,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Pending(remaining) => write!(f, "{remaining}"),
            Countdown::Elapsed => f.write_str(ELAPSED_TEXT),
        }
    }
}

/// Drives a single countdown across periodic ticks.
///
/// The clock recomputes from the supplied `now` on every tick until the target passes, after
/// which it stays [`Countdown::Elapsed`] without further work. Starting a new clock recomputes
/// from scratch.
#[derive(Debug, Clone)]
pub struct CountdownClock<Tz: TimeZone> {
    target: DateTime<Tz>,
    state: Countdown,
}

impl<Tz: TimeZone> CountdownClock<Tz> {
    /// Starts a clock towards `target`, computing its initial state at `now`.
    pub fn start<NowTz: TimeZone>(now: &DateTime<NowTz>, target: DateTime<Tz>) -> Self {
        let state = Countdown::between(now, &target);
        Self { target, state }
    }

    /// Advances the clock to `now` and returns the new state.
    pub fn tick<NowTz: TimeZone>(&mut self, now: &DateTime<NowTz>) -> Countdown {
        if !self.state.is_elapsed() {
            self.state = Countdown::between(now, &self.target);
        }
        self.state
    }

    /// The state computed by the last tick.
    pub fn state(&self) -> Countdown {
        self.state
    }

    /// The instant this clock counts down to.
    pub fn target(&self) -> &DateTime<Tz> {
        &self.target
    }

    /// Whether the clock reached its terminal state.
    pub fn is_elapsed(&self) -> bool {
        self.state.is_elapsed()
    }
}
