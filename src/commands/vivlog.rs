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

use super::classify::Classify;
use super::help::Help;
use super::helps::vivlog;
use super::parse::Parse;
use super::watch::Watch;
use crate::core::config::{CONFIG_FILE, LOCAL_CONFIG_FILE};
use crate::core::context::Context;
use crate::core::report::ColorMode;
use crate::util::environment::VIVLOG_HOME;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Vivlog {
    version: bool,
    color: Option<ColorMode>,
    command: Option<VivlogSubcommand>,
}

impl Command for Vivlog {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(vivlog::HELP))?;
        Ok(Vivlog {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // prioritize version information
        if self.version == true {
            println!("vivlog {}", VERSION);
            return Ok(());
        }
        match self.command {
            Some(command) => {
                // command-line options override the configuration files
                let context = Context::new()
                    .color(self.color)
                    .home(VIVLOG_HOME)
                    .local_settings(LOCAL_CONFIG_FILE)?
                    .settings(CONFIG_FILE)?;
                // keep help and error text consistent with the reporter
                colored::control::set_override(context.get_color_mode().enabled());
                command.execute(&context)
            }
            None => {
                println!("{}", vivlog::HELP);
                Ok(())
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum VivlogSubcommand {
    Watch(Watch),
    Parse(Parse),
    Classify(Classify),
    Help(Help),
}

impl Subcommand<Context> for VivlogSubcommand {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["watch", "w", "parse", "p", "classify", "help"])?
            .as_ref()
        {
            "w" | "watch" => Ok(Self::Watch(Watch::interpret(cli)?)),
            "p" | "parse" => Ok(Self::Parse(Parse::interpret(cli)?)),
            "classify" => Ok(Self::Classify(Classify::interpret(cli)?)),
            "help" => Ok(Self::Help(Help::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            Self::Watch(c) => c.execute(context),
            Self::Parse(c) => c.execute(context),
            Self::Classify(c) => c.execute(context),
            Self::Help(c) => c.execute(&()),
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
