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

use super::helps;
use crate::error::Error;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Help {
    list: bool,
    topic: Option<Topic>,
}

impl Subcommand<()> for Help {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(helps::help::HELP))?;
        Ok(Help {
            list: cli.check(Arg::flag("list"))?,
            topic: cli.get(Arg::positional("topic"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        match self.list {
            true => print!("{}", Topic::list_all()),
            false => println!("{}", self.topic.as_ref().map_or(helps::vivlog::HELP, Topic::as_page)),
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Topic {
    Watch,
    Parse,
    Classify,
    Help,
}

impl Topic {
    const NAMES: [&'static str; 4] = ["watch", "parse", "classify", "help"];

    fn list_all() -> String {
        Self::NAMES.into_iter().fold(String::new(), |mut acc, x| {
            acc.push_str(&format!("{}\n", x));
            acc
        })
    }

    /// Transforms the variant to its corresponding help page.
    fn as_page(&self) -> &'static str {
        match &self {
            Self::Watch => helps::watch::HELP,
            Self::Parse => helps::parse::HELP,
            Self::Classify => helps::classify::HELP,
            Self::Help => helps::help::HELP,
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "watch" | "w" => Self::Watch,
            "parse" | "p" => Self::Parse,
            "classify" => Self::Classify,
            "help" => Self::Help,
            _ => {
                return Err(Error::InvalidValue(
                    "topic",
                    s.to_string(),
                    Self::NAMES.join(", "),
                ))
            }
        })
    }
}
