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

use super::helps::classify;
use crate::core::classifier;
use crate::core::context::Context;
use crate::core::message::Message;
use crate::error::{Error, LastError};
use std::io::BufRead;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Classify {
    json: bool,
    lines: Vec<String>,
}

impl Subcommand<Context> for Classify {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(classify::HELP))?;
        Ok(Classify {
            // Flags
            json: cli.check(Arg::flag("json"))?,
            // Remaining args
            lines: cli.remainder()?,
        })
    }

    fn execute(self, _: &Context) -> proc::Result {
        match self.lines.is_empty() {
            true => {
                for line in std::io::stdin().lock().lines() {
                    let line = line.map_err(|e| Error::StreamBroken(LastError(e.to_string())))?;
                    println!("{}", self.describe(&classifier::classify(&line))?);
                }
            }
            false => {
                for line in &self.lines {
                    println!("{}", self.describe(&classifier::classify(line))?);
                }
            }
        }
        Ok(())
    }
}

impl Classify {
    fn describe(&self, msg: &Message) -> Result<String, serde_json::Error> {
        match self.json {
            true => serde_json::to_string(msg),
            false => Ok(format!("{:<8}{}", msg.kind().as_str(), msg)),
        }
    }
}
