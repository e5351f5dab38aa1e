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

use super::helps::parse;
use crate::core::context::Context;
use crate::core::message::{Kind, Message};
use crate::core::report::{Level, Reporter};
use crate::core::summary::Summary;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Parse {
    file: PathBuf,
    json: bool,
    kinds: Option<Vec<Kind>>,
}

impl Subcommand<Context> for Parse {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(parse::HELP))?;
        Ok(Parse {
            // Flags
            json: cli.check(Arg::flag("json"))?,
            // Options
            kinds: cli.get_all(Arg::option("kind").value("kind"))?,
            // Positionals
            file: cli.require(Arg::positional("file"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let summary = Summary::from_file(&self.file)?;
        let reporter = c.reporter(false);

        match (&self.kinds, self.json) {
            (None, true) => println!("{}", serde_json::to_string_pretty(&summary)?),
            (None, false) => println!("{}", summary),
            (Some(kinds), true) => {
                let selected = Self::select(&summary, kinds);
                println!("{}", serde_json::to_string_pretty(&selected)?);
            }
            (Some(kinds), false) => Self::select(&summary, kinds)
                .into_iter()
                .filter_map(|m| Self::render(&reporter, m))
                .for_each(|line| println!("{}", line)),
        }
        Ok(())
    }
}

impl Parse {
    /// Collects the messages of the requested kinds in bucket order.
    fn select<'a>(summary: &'a Summary, kinds: &[Kind]) -> Vec<&'a Message> {
        summary
            .iter()
            .filter(|(k, _)| kinds.contains(k))
            .flat_map(|(_, bucket)| bucket.iter())
            .collect()
    }

    /// Formats a message for display, skipping those with nothing to show.
    fn render(reporter: &Reporter, msg: &Message) -> Option<String> {
        match msg {
            Message::Info(_) | Message::Warning(_) | Message::Error(_) => {
                reporter.format_message(msg)
            }
            Message::None => None,
            _ => Some(reporter.format(Level::Note, &msg.to_string())),
        }
    }
}
