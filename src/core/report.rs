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

use super::message::Message;
use crate::error::Error;
use crate::util::environment;
use chrono::Local;
use colored::Colorize;
use serde_derive::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::str::FromStr;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decides if output should be colored.
    ///
    /// `auto` colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn enabled(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                environment::read(environment::NO_COLOR).is_none()
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(Error::InvalidValue(
                "color mode",
                s.to_string(),
                String::from("auto, always, never"),
            )),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Level {
    Error,
    Warning,
    Info,
    Ok,
    Note,
}

/// Prints status lines and tool messages to the console.
///
/// Whether to color and whether to stamp the time are fixed when the reporter
/// is created.
#[derive(Debug, PartialEq, Clone)]
pub struct Reporter {
    color: bool,
    timestamp: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self {
            color: color,
            timestamp: false,
        }
    }

    /// Prefixes every line with the local date and time.
    pub fn timestamp(mut self, enable: bool) -> Self {
        self.timestamp = enable;
        self
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Renders `text` for the given `level` without printing it.
    pub fn format(&self, level: Level, text: &str) -> String {
        let text = match self.timestamp {
            true => format!("{} | {}", Local::now().format(TIMESTAMP_FORMAT), text),
            false => text.to_string(),
        };
        if self.color == false {
            return text;
        }
        match level {
            Level::Error => text.red().to_string(),
            Level::Warning => text.yellow().to_string(),
            Level::Info => text.bright_magenta().to_string(),
            Level::Ok => text.green().to_string(),
            Level::Note => text.bright_blue().to_string(),
        }
    }

    /// Renders a severity-tagged tool message as `[code] body`.
    ///
    /// Returns `None` for messages that carry no severity.
    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let level = match msg {
            Message::Error(_) => Level::Error,
            Message::Warning(_) => Level::Warning,
            Message::Info(_) => Level::Info,
            _ => return None,
        };
        let text = match msg.code() {
            Some(code) if code.is_empty() == false => format!("[{}] {}", code, msg.body()),
            _ => msg.body().to_string(),
        };
        Some(self.format(level, &text))
    }

    pub fn emit(&self, level: Level, text: &str) {
        println!("{}", self.format(level, text));
    }

    pub fn error(&self, text: &str) {
        self.emit(Level::Error, text)
    }

    pub fn ok(&self, text: &str) {
        self.emit(Level::Ok, text)
    }

    pub fn note(&self, text: &str) {
        self.emit(Level::Note, text)
    }
}
