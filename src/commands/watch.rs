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

use super::helps::watch;
use crate::core::context::Context;
use crate::core::monitor::{Monitor, Progress};
use crate::core::severity::Severity;
use crate::error::Error;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Watch {
    severity: Option<Severity>,
    log: Option<PathBuf>,
    total: Option<usize>,
    timestamp: bool,
    strict: bool,
}

impl Subcommand<Context> for Watch {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(watch::HELP))?;
        Ok(Watch {
            // Flags
            timestamp: cli.check(Arg::flag("timestamp"))?,
            strict: cli.check(Arg::flag("strict"))?,
            // Options
            severity: cli.get(Arg::option("severity").value("level"))?,
            log: cli.get(Arg::option("log").value("file"))?,
            total: cli.get(Arg::option("total").value("n"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let reporter = c.reporter(self.timestamp);

        let mut monitor = Monitor::new(reporter.clone(), c.get_severity(self.severity))
            .total(self.total);
        if let Some(path) = &self.log {
            monitor = monitor.tee(path)?;
        }

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let progress = monitor.run(stdin.lock(), &mut stdout.lock())?;

        match progress.get_errors() {
            0 => reporter.ok(&format!("complete: {}", progress)),
            _ => reporter.error(&format!("complete with errors: {}", progress)),
        }
        if let Some(path) = monitor.get_log_path() {
            reporter.note(&format!("check the log in: {}", path.display()));
        }

        Ok(strictness(self.strict, &progress)?)
    }
}

/// Fails when `strict` is set and the tool reported any errors.
fn strictness(strict: bool, progress: &Progress) -> Result<(), Error> {
    match strict == true && progress.get_errors() > 0 {
        true => Err(Error::ToolErrorsReported(progress.get_errors())),
        false => Ok(()),
    }
}
