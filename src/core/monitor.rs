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

//! Follows tool output as it streams in and reports on its progress.

use super::classifier;
use super::message::{Kind, Message};
use super::report::{Level, Reporter};
use super::severity::Severity;
use crate::error::{Error, LastError};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Running tallies of what the tool has reported so far.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Progress {
    lines: usize,
    commands: usize,
    phases: usize,
    infos: usize,
    warnings: usize,
    errors: usize,
    total: Option<usize>,
}

impl Progress {
    /// Counts one non-empty line that was classified as `kind`.
    pub fn record(&mut self, kind: Kind) {
        self.lines += 1;
        match kind {
            Kind::Command => self.commands += 1,
            Kind::Phase => self.phases += 1,
            Kind::Info => self.infos += 1,
            Kind::Warning => self.warnings += 1,
            Kind::Error => self.errors += 1,
            Kind::System | Kind::None => (),
        }
    }

    pub fn get_lines(&self) -> usize {
        self.lines
    }

    pub fn get_commands(&self) -> usize {
        self.commands
    }

    pub fn get_phases(&self) -> usize {
        self.phases
    }

    pub fn get_warnings(&self) -> usize {
        self.warnings
    }

    pub fn get_errors(&self) -> usize {
        self.errors
    }

    /// Percentage of expected commands seen so far, capped at 100.
    ///
    /// Returns `None` when the expected number of commands is unknown.
    pub fn percent(&self) -> Option<usize> {
        match self.total {
            Some(0) => Some(100),
            Some(t) => Some((self.commands * 100 / t).min(100)),
            None => None,
        }
    }

    /// Formats the command counter as `[ 3/40   7%]` or `[  3]`.
    fn counter(&self) -> String {
        match (self.total, self.percent()) {
            (Some(t), Some(p)) => {
                let width = t.to_string().len();
                format!("[{:>w$}/{} {:>3}%]", self.commands, t, p, w = width)
            }
            _ => format!("[{:>3}]", self.commands),
        }
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines, {} commands, {} phases, {} warnings, {} errors",
            self.lines, self.commands, self.phases, self.warnings, self.errors
        )
    }
}

/// Classifies tool output line by line and prints what is worth seeing.
pub struct Monitor {
    reporter: Reporter,
    severity: Severity,
    progress: Progress,
    current: Option<String>,
    tee: Option<(PathBuf, BufWriter<File>)>,
}

impl Monitor {
    pub fn new(reporter: Reporter, severity: Severity) -> Self {
        Self {
            reporter: reporter,
            severity: severity,
            progress: Progress::default(),
            current: None,
            tee: None,
        }
    }

    /// Sets the number of commands the tool is expected to run.
    pub fn total(mut self, total: Option<usize>) -> Self {
        self.progress.total = total;
        self
    }

    /// Copies every raw line of output into the file at `path`, replacing any
    /// existing contents.
    pub fn tee(mut self, path: &Path) -> Result<Self, Error> {
        let file = File::create(path)
            .map_err(|e| Error::LogNotSaved(path.to_path_buf(), LastError(e.to_string())))?;
        self.tee = Some((path.to_path_buf(), BufWriter::new(file)));
        Ok(self)
    }

    pub fn get_progress(&self) -> &Progress {
        &self.progress
    }

    /// References the most recent command the tool echoed.
    pub fn get_current_command(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn get_log_path(&self) -> Option<&PathBuf> {
        self.tee.as_ref().map(|(p, _)| p)
    }

    /// Accounts for a single line of output.
    ///
    /// Returns the text to display for the line, if any.
    pub fn update(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() == true {
            return None;
        }
        let msg = classifier::classify(line);
        self.progress.record(msg.kind());
        match &msg {
            Message::Command { body } => {
                self.current = Some(body.clone());
                let text = format!("{} {}", self.progress.counter(), body);
                Some(self.reporter.format(Level::Note, &text))
            }
            Message::Phase(p) if p.number.is_empty() == false => {
                let text = format!("phase {}: {}", p.number, p.body);
                Some(self.reporter.format(Level::Ok, &text))
            }
            Message::Info(_) | Message::Warning(_) | Message::Error(_) => {
                match self.severity.admits(msg.kind()) {
                    true => self.reporter.format_message(&msg),
                    false => None,
                }
            }
            _ => None,
        }
    }

    /// Consumes the `reader` until it is exhausted, writing displayable lines to
    /// `out`.
    ///
    /// Bytes that are not valid UTF-8 are replaced before classification but are
    /// kept as-is in the saved log.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, out: &mut W) -> Result<Progress, Error> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::StreamBroken(LastError(e.to_string())))?;
            if n == 0 {
                break;
            }
            if let Some((path, file)) = &mut self.tee {
                file.write_all(&buf)
                    .map_err(|e| Error::LogNotSaved(path.clone(), LastError(e.to_string())))?;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Some(text) = self.update(&line) {
                writeln!(out, "{}", text)
                    .map_err(|e| Error::StreamBroken(LastError(e.to_string())))?;
            }
        }
        self.finish()?;
        Ok(self.progress.clone())
    }

    /// Flushes the saved log to disk.
    pub fn finish(&mut self) -> Result<(), Error> {
        if let Some((path, file)) = &mut self.tee {
            file.flush()
                .map_err(|e| Error::LogNotSaved(path.clone(), LastError(e.to_string())))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STREAM: &str = "\
# read_xdc ./constrs/top.xdc
INFO: [Vivado 12-3482] The checkpoint was created with an older version

# synth_design -top top -part xc7a35tcpg236-1
Starting synth_design
WARNING: [Synth 8-7129] Port rst in module top is either unconnected or has no load
Time (s): cpu = 00:00:12 ; elapsed = 00:00:15 . Memory (MB): peak = 1408.4 ; gain = 0.0 ; free physical = 512.1 ; free virtual = 4096.0
Phase 1.1 Placer Initialization Netlist Sorting | Checksum: 9a3e1f2b
ERROR: [Place 30-58] IO placement is infeasible.
";

    fn monitor(severity: Severity) -> Monitor {
        Monitor::new(Reporter::new(false), severity)
    }

    #[test]
    fn report_at_info() {
        let mut m = monitor(Severity::Info).total(Some(4));
        let mut out = Vec::new();
        let progress = m.run(STREAM.as_bytes(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\
[1/4  25%] read_xdc ./constrs/top.xdc
[Vivado 12-3482] The checkpoint was created with an older version
[2/4  50%] synth_design -top top -part xc7a35tcpg236-1
[Synth 8-7129] Port rst in module top is either unconnected or has no load
phase 1.1: Placer Initialization Netlist Sorting
[Place 30-58] IO placement is infeasible.
"
        );
        assert_eq!(progress.get_lines(), 8);
        assert_eq!(progress.get_commands(), 2);
        assert_eq!(progress.get_phases(), 2);
        assert_eq!(progress.get_warnings(), 1);
        assert_eq!(progress.get_errors(), 1);
        assert_eq!(
            m.get_current_command(),
            Some("synth_design -top top -part xc7a35tcpg236-1")
        );
    }

    #[test]
    fn report_at_error() {
        let mut m = monitor(Severity::Error);
        let mut out = Vec::new();
        m.run(STREAM.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.contains("[Synth 8-7129]"), false);
        assert_eq!(out.contains("[Vivado 12-3482]"), false);
        assert_eq!(out.contains("[Place 30-58]"), true);
        // no expected total
        assert_eq!(out.starts_with("[  1] read_xdc"), true);
    }

    #[test]
    fn percent_is_capped() {
        let mut m = monitor(Severity::Info).total(Some(1));
        m.update("# open_project top.xpr");
        m.update("# launch_runs synth_1");
        assert_eq!(m.get_progress().percent(), Some(100));
        assert_eq!(monitor(Severity::Info).get_progress().percent(), None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut m = monitor(Severity::Info);
        assert_eq!(m.update("   \t"), None);
        assert_eq!(m.get_progress().get_lines(), 0);
    }

    #[test]
    fn tee_keeps_raw_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vivado_output_log.txt");
        let raw: &[u8] = b"# report_timing\n  indented \xff line\n\nINFO: [Common 17-206] Exiting Vivado";
        let mut m = monitor(Severity::Info).tee(&path).unwrap();
        let mut out = Vec::new();
        let progress = m.run(raw, &mut out).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), raw);
        assert_eq!(m.get_log_path(), Some(&path));
        assert_eq!(progress.get_lines(), 3);
    }

    #[test]
    fn tee_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");
        match monitor(Severity::Info).tee(&path) {
            Err(Error::LogNotSaved(p, _)) => assert_eq!(p, path),
            _ => panic!("expected failure to create log"),
        }
    }
}
