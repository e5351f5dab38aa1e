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

use super::report::ColorMode;
use super::severity::Severity;
use crate::error::{Error, LastError};
use serde_derive::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Configuration file found in the vivlog home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration file found in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "vivlog.toml";

#[derive(PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    severity: Option<Severity>,
    color: Option<ColorMode>,
    timestamp: Option<bool>,
}

impl General {
    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.severity.is_none() == true {
                self.severity = rhs.severity;
            }
            if self.color.is_none() == true {
                self.color = rhs.color;
            }
            if self.timestamp.is_none() == true {
                self.timestamp = rhs.timestamp;
            }
        }
    }
}

#[derive(PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    general: Option<General>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the information from `rhs` where `self` has none.
    ///
    /// Data already in `self` takes precedence over `rhs`.
    pub fn append(&mut self, rhs: Self) {
        match &mut self.general {
            Some(v) => v.merge(rhs.general),
            None => self.general = rhs.general,
        }
    }

    /// Reads the configuration at `path`, returning an empty configuration if
    /// there is no file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        if path.is_file() == false {
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigInvalid(path.to_path_buf(), LastError(e.to_string())))?;
        Self::from_str(&contents)
            .map_err(|e| Error::ConfigInvalid(path.to_path_buf(), LastError(e.to_string())))
    }

    pub fn get_severity(&self) -> Severity {
        self.general
            .as_ref()
            .and_then(|g| g.severity)
            .unwrap_or_default()
    }

    pub fn get_color(&self) -> ColorMode {
        self.general
            .as_ref()
            .and_then(|g| g.color)
            .unwrap_or_default()
    }

    pub fn get_timestamp(&self) -> bool {
        self.general
            .as_ref()
            .and_then(|g| g.timestamp)
            .unwrap_or(false)
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
