// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::File, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::Generator;

use crate::Cli;

/// Print a completion script for `tminus`.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate a shell completion script")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
            .arg(
                arg!(-o --output [PATH] "Write the script to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let Some(shell) = matches.get_one::<Shell>("shell") else {
            unreachable!("shell is a required argument")
        };
        Self {
            shell: *shell,
            output: matches.get_one::<PathBuf>("output").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)?;
                self.shell.write_script(&mut file);
            }
            None => self.shell.write_script(&mut io::stdout()),
        }
        Ok(())
    }
}

/// Shells with completion support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    pub fn write_script(self, buf: &mut dyn io::Write) {
        use clap_complete::Shell as Builtin;
        match self {
            Shell::Bash => emit(Builtin::Bash, buf),
            Shell::Elvish => emit(Builtin::Elvish, buf),
            Shell::Fish => emit(Builtin::Fish, buf),
            Shell::Nushell => emit(clap_complete_nushell::Nushell, buf),
            Shell::PowerShell => emit(Builtin::PowerShell, buf),
            Shell::Zsh => emit(Builtin::Zsh, buf),
        }
    }
}

fn emit(generator: impl Generator, buf: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(generator, &mut cmd, bin, buf);
}
