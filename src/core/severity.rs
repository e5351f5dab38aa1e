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

use super::message::Kind;
use crate::error::Error;
use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Lowest severity of tagged messages to report, ordered `info < warning < error`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the severity of a message kind, if it carries one.
    pub fn of(kind: Kind) -> Option<Self> {
        match kind {
            Kind::Info => Some(Self::Info),
            Kind::Warning => Some(Self::Warning),
            Kind::Error => Some(Self::Error),
            _ => None,
        }
    }

    /// Checks if a message of `kind` passes this threshold.
    pub fn admits(&self, kind: Kind) -> bool {
        match Self::of(kind) {
            Some(s) => &s >= self,
            None => false,
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(Error::InvalidValue(
                "severity",
                s.to_string(),
                String::from("info, warning, error"),
            )),
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn threshold() {
        assert_eq!(Severity::Info.admits(Kind::Info), true);
        assert_eq!(Severity::Info.admits(Kind::Error), true);
        assert_eq!(Severity::Warning.admits(Kind::Info), false);
        assert_eq!(Severity::Warning.admits(Kind::Warning), true);
        assert_eq!(Severity::Warning.admits(Kind::Error), true);
        assert_eq!(Severity::Error.admits(Kind::Warning), false);
        assert_eq!(Severity::Error.admits(Kind::Error), true);
        // untagged kinds never pass
        assert_eq!(Severity::Info.admits(Kind::Command), false);
        assert_eq!(Severity::Info.admits(Kind::System), false);
    }

    #[test]
    fn from_str() {
        assert_eq!(Severity::from_str("warning"), Ok(Severity::Warning));
        assert_eq!(
            Severity::from_str("critical").unwrap_err().to_string(),
            "invalid severity \"critical\": expecting one of info, warning, error"
        );
    }
}
