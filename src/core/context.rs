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

use super::config::Config;
use super::report::{ColorMode, Reporter};
use super::severity::Severity;
use crate::error::Error;
use crate::util::environment;
use std::path::{Path, PathBuf};

/// Runtime state shared by every subcommand.
#[derive(Debug, PartialEq)]
pub struct Context {
    home_path: Option<PathBuf>,
    config: Config,
    color: Option<ColorMode>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            home_path: None,
            config: Config::new(),
            color: None,
        }
    }

    /// Sets the home directory from the environment variable `key`, falling back
    /// to `$HOME/.vivlog`.
    ///
    /// The directory is not required to exist. When the user's home directory
    /// cannot be detected, no home directory is used.
    pub fn home(mut self, key: &str) -> Self {
        self.home_path = match environment::read(key) {
            Some(s) => Some(PathBuf::from(s)),
            None => home::home_dir().map(|p| p.join(environment::HOME_DIR_NAME)),
        };
        self
    }

    /// Loads the configuration file `name` from the home directory, if there is
    /// one.
    ///
    /// Values already loaded keep precedence.
    pub fn settings(self, name: &str) -> Result<Self, Error> {
        match &self.home_path {
            Some(dir) => {
                let path = dir.join(name);
                self.settings_from(&path)
            }
            None => Ok(self),
        }
    }

    /// Loads the configuration file `name` from the current working directory.
    ///
    /// Must be called before [Context::settings] to take precedence over it.
    pub fn local_settings(self, name: &str) -> Result<Self, Error> {
        match std::env::current_dir() {
            Ok(cwd) => self.settings_from(&cwd.join(name)),
            Err(_) => Ok(self),
        }
    }

    fn settings_from(mut self, path: &Path) -> Result<Self, Error> {
        self.config.append(Config::from_file(path)?);
        Ok(self)
    }

    /// Overrides the configured color mode.
    pub fn color(mut self, mode: Option<ColorMode>) -> Self {
        self.color = mode;
        self
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_color_mode(&self) -> ColorMode {
        self.color.unwrap_or(self.config.get_color())
    }

    /// Returns the severity threshold, preferring `cli` over the configuration.
    pub fn get_severity(&self, cli: Option<Severity>) -> Severity {
        cli.unwrap_or(self.config.get_severity())
    }

    /// Creates the console reporter, enabling timestamps if either `cli` or the
    /// configuration asks for them.
    pub fn reporter(&self, cli_timestamp: bool) -> Reporter {
        Reporter::new(self.get_color_mode().enabled())
            .timestamp(cli_timestamp || self.config.get_timestamp())
    }
}
