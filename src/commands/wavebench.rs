//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::commands::helps::wavebench;
use crate::core::config::CONFIG_FILE;
use crate::core::context::Context;
use crate::util::anyerror::AnyError;
use crate::util::environment::{self, NO_COLOR, WAVEBENCH_HOME};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Wavebench {
    version: bool,
    color: Option<ColorMode>,
    command: Option<WavebenchSubcommand>,
}

impl Command for Wavebench {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(wavebench::HELP))?;
        Ok(Wavebench {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // need to set this coloring mode ASAP
        self.color.unwrap_or(ColorMode::Auto).apply();
        // prioritize version information
        if self.version == true {
            println!("wavebench {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            match c {
                // documentation does not need any runtime state
                WavebenchSubcommand::Help(h) => h.execute(&()),
                _ => {
                    let context = Context::new()
                        .home(WAVEBENCH_HOME)?
                        .settings(CONFIG_FILE)?;
                    c.execute(&context)
                }
            }
        // if no command is given then print default help
        } else {
            Ok(println!("{}", wavebench::HELP))
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    fn apply(&self) {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => {
                if environment::read(NO_COLOR).is_some() {
                    colored::control::set_override(false)
                }
            }
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "unknown color mode \"{}\"; expecting auto, always, or never",
                s
            ))),
        }
    }
}

use crate::commands::gen::Gen;
use crate::commands::help::Help as HelpTopic;
use crate::commands::read::Read;
use crate::commands::run::Run;
use crate::commands::show::Show;

#[derive(Debug, PartialEq)]
enum WavebenchSubcommand {
    Help(HelpTopic),
    Read(Read),
    Show(Show),
    Gen(Gen),
    Run(Run),
}

impl Subcommand<Context> for WavebenchSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["help", "read", "show", "gen", "run"])?
            .as_ref()
        {
            "help" => Ok(Self::Help(HelpTopic::interpret(cli)?)),
            "read" => Ok(Self::Read(Read::interpret(cli)?)),
            "show" => Ok(Self::Show(Show::interpret(cli)?)),
            "gen" => Ok(Self::Gen(Gen::interpret(cli)?)),
            "run" => Ok(Self::Run(Run::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            Self::Help(c) => c.execute(&()),
            Self::Read(c) => c.execute(context),
            Self::Show(c) => c.execute(context),
            Self::Gen(c) => c.execute(context),
            Self::Run(c) => c.execute(context),
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn color_modes() {
        assert_eq!(ColorMode::from_str("never").unwrap(), ColorMode::Never);
        assert_eq!(ColorMode::from_str("always").unwrap(), ColorMode::Always);
        assert_eq!(ColorMode::from_str("sometimes").is_err(), true);
    }
}
