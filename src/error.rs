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

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("log file {0:?} does not exist{1}")]
    LogNotFound(PathBuf, Hint),
    #[error("failed to read log file {0:?}: {1}")]
    LogUnreadable(PathBuf, LastError),
    #[error("failed to write log file {0:?}: {1}")]
    LogNotSaved(PathBuf, LastError),
    #[error("failed to read tool output: {0}")]
    StreamBroken(LastError),
    #[error("failed to parse configuration file {0:?}: {1}")]
    ConfigInvalid(PathBuf, LastError),
    #[error("tool reported {0} error(s)")]
    ToolErrorsReported(usize),
    #[error("invalid {0} {1:?}: expecting one of {2}")]
    InvalidValue(&'static str, String, String),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    SaveLog,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::SaveLog => "use `vivlog watch --log <file>` to save the tool output while it runs",
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("No such file or directory (os error 2)")),
            "no such file or directory (os error 2)"
        );
        assert_eq!(
            Error::lowerize(String::from("TOML parse error at line 1")),
            "TOML parse error at line 1"
        );
        assert_eq!(Error::lowerize(String::from("A")), "a");
        assert_eq!(Error::lowerize(String::new()), "");
    }

    #[test]
    fn hint_follows_message() {
        colored::control::set_override(false);
        assert_eq!(
            Error::LogNotFound(PathBuf::from("run.log"), Hint::SaveLog).to_string(),
            "log file \"run.log\" does not exist\n\nhint: use `vivlog watch --log <file>` to save the tool output while it runs"
        );
    }
}
