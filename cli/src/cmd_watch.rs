// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use clap::{ArgMatches, Command};
use colored::Colorize;
use tminus_core::{Countdown, Tminus};
use tokio::time::{self, MissedTickBehavior};

use crate::arg::EventArgs;
use crate::cmd_event::get_or_report;

#[derive(Debug, Clone, Copy)]
pub struct CmdWatch {
    pub id: i64,
}

impl CmdWatch {
    pub const NAME: &str = "watch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Watch the countdown to an event until it passes")
            .arg(EventArgs::id("watch"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventArgs::get_id(matches),
        }
    }

    pub async fn run(self, tminus: &mut Tminus) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "watching event...");
        let Some(event) = get_or_report(tminus, self.id).await? else {
            return Ok(());
        };

        println!("{} {}", event.name.bold(), event.moment().italic());

        let tick = tminus.config().tick.as_std();
        let mut clock = tminus.clock(&event);
        let mut stdout = io::stdout();
        watch(tick, &mut stdout, || {
            tminus.refresh_now();
            clock.tick(&tminus.now())
        })
        .await?;
        Ok(())
    }
}

/// Re-renders the countdown on every tick until it elapses or the user interrupts.
async fn watch<F>(tick: Duration, w: &mut impl Write, mut next: F) -> io::Result<Countdown>
where
    F: FnMut() -> Countdown,
{
    let mut interval = time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let state = next();
                render(w, &state)?;
                if state.is_elapsed() {
                    writeln!(w)?;
                    return Ok(state);
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupted, stop watching");
                writeln!(w)?;
                return Ok(next());
            }
        }
    }
}

fn render(w: &mut impl Write, state: &Countdown) -> io::Result<()> {
    // carriage return plus erase-line keeps the countdown on a single row
    let text = match state {
        Countdown::Elapsed => state.to_string().bright_black(),
        Countdown::Pending(_) => state.to_string().normal(),
    };
    write!(w, "\r\x1b[2K{text}")?;
    w.flush()
}
