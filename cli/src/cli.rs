// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tminus_core::{APP_NAME, Tminus};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventList, CmdEventNew, CmdEventShow};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_watch::CmdWatch;
use crate::config::parse_config;

const TMINUS_LOG_ENV: &str = "TMINUS_LOG";

/// Run the tminus command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(TMINUS_LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Count down to the events that matter.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Falls back to $TMINUS_CONFIG, then to \
$XDG_CONFIG_HOME/tminus/config.toml on Linux and MacOS, %LOCALAPPDATA%/tminus/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventShow::command())
            .subcommand(CmdWatch::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Self {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)),
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdEventShow::NAME, matches)) => Show(CmdEventShow::from(matches)),
            Some((CmdWatch::NAME, matches)) => Watch(CmdWatch::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Cli { config, command }
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// Add a new event
    New(CmdEventNew),

    /// List events
    List(CmdEventList),

    /// Show an event
    Show(CmdEventShow),

    /// Watch the countdown to an event
    Watch(CmdWatch),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Delete an event
    Delete(CmdEventDelete),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            New(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            List(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Show(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Watch(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Edit(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Delete(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Tminus) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let mut tminus = Tminus::new(core_config).await?;

        f(&mut tminus).await?;

        tminus.close().await?;
        Ok(())
    }
}
