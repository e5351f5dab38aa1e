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

//! Classifies single lines of Vivado output into typed messages.

use super::message::{Message, Phase, Resources, Tagged};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const COMMAND_PREFIX: &str = "# ";
const STEP_PREFIX: &str = "Starting";
const SYSTEM_PREFIX: &str = "Time (s):";
const PHASE_PREFIX: &str = "Phase ";
const PHASE_MARKER: &str = "Checksum";

const SYSTEM_PATTERN: &str = r"cpu = ([0-9:]+) ; elapsed = ([0-9:]+) . Memory \(MB\): peak = ([0-9:.]+) ; gain = ([0-9:.]+) ; free physical = ([0-9:.]+) ; free virtual = ([0-9:.]+)";
const PHASE_PATTERN: &str = r"Phase ([0-9.]+) (.+)\| Checksum: ([a-zA-Z0-9]+)";
const TAGGED_PATTERN: &str = r"(WARNING|ERROR|INFO|CRITICAL WARNING): \[([A-Za-z\-0-9 ]*)] (.*)";

type Matcher = fn(&str) -> Option<Message>;

/// Checks tried in order; the first one to produce a message decides the line.
const MATCHERS: [Matcher; 5] = [
    match_command,
    match_step,
    match_system,
    match_phase,
    match_tagged,
];

/// Classifies a single line of tool output.
///
/// Never fails: a line that is not recognized becomes [Message::None].
pub fn classify(line: &str) -> Message {
    if line.is_empty() == true {
        return Message::None;
    }
    MATCHERS
        .iter()
        .find_map(|m| m(line))
        .unwrap_or(Message::None)
}

/// Compiles `pattern` once and keeps it for the life of the process.
///
/// Returns `None` if the pattern does not compile.
fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

/// Returns the captures of the last match of `re` on `text`.
fn last_captures<'t>(re: Option<&Regex>, text: &'t str) -> Option<Captures<'t>> {
    re.and_then(|re| re.captures_iter(text).last())
}

/// Extracts group `i` of `caps` as an owned string, empty if it did not participate.
fn group(caps: &Captures, i: usize) -> String {
    caps.get(i)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Extracts group `i` of `caps` without its trailing whitespace.
fn trimmed(caps: &Captures, i: usize) -> String {
    caps.get(i)
        .map(|m| m.as_str().trim_end().to_string())
        .unwrap_or_default()
}

/// Tcl commands echoed by Vivado in batch mode: `# synth_design -top top`.
fn match_command(line: &str) -> Option<Message> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || line.starts_with(COMMAND_PREFIX) == false {
        return None;
    }
    match bytes[2].is_ascii_lowercase() {
        true => Some(Message::Command {
            body: line[COMMAND_PREFIX.len()..].trim_end().to_string(),
        }),
        false => None,
    }
}

/// Step banners: `Starting Routing Task`.
///
/// The step name is deliberately discarded, leaving every field empty. Progress
/// displays have always treated these lines as bare phase ticks.
fn match_step(line: &str) -> Option<Message> {
    match line.starts_with(STEP_PREFIX) {
        true => Some(Message::Phase(Phase::default())),
        false => None,
    }
}

/// Resource usage reports: `Time (s): cpu = 00:00:10 ; elapsed = ...`.
fn match_system(line: &str) -> Option<Message> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();

    if line.starts_with(SYSTEM_PREFIX) == false {
        return None;
    }
    let resources = match last_captures(compiled(&RE, SYSTEM_PATTERN), line) {
        Some(caps) => Resources {
            cpu: group(&caps, 1),
            elapsed: group(&caps, 2),
            peak: group(&caps, 3),
            gain: group(&caps, 4),
            free_physical: group(&caps, 5),
            free_virtual: group(&caps, 6),
        },
        None => Resources::default(),
    };
    Some(Message::System(resources))
}

/// Numbered phase progress: `Phase 1.2 Build Placer Netlist Model | Checksum: 1b1e5a0a6`.
fn match_phase(line: &str) -> Option<Message> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();

    if line.contains(PHASE_MARKER) == false || line.starts_with(PHASE_PREFIX) == false {
        return None;
    }
    let line = line.replace('\t', " ");
    let phase = match last_captures(compiled(&RE, PHASE_PATTERN), &line) {
        Some(caps) => Phase {
            number: trimmed(&caps, 1),
            body: trimmed(&caps, 2),
            checksum: trimmed(&caps, 3),
        },
        None => Phase::default(),
    };
    Some(Message::Phase(phase))
}

/// Severity-tagged messages: `CRITICAL WARNING: [Constraints 18-5210] ...`.
fn match_tagged(line: &str) -> Option<Message> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();

    let caps = last_captures(compiled(&RE, TAGGED_PATTERN), line)?;
    let tagged = Tagged {
        code: group(&caps, 2),
        body: trimmed(&caps, 3),
    };
    match caps.get(1).map(|m| m.as_str()) {
        Some("INFO") => Some(Message::Info(tagged)),
        Some("WARNING") | Some("CRITICAL WARNING") => Some(Message::Warning(tagged)),
        Some("ERROR") => Some(Message::Error(tagged)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::message::Kind;

    const SYSTEM_LINE: &str = "Time (s): cpu = 00:01:02 ; elapsed = 00:02:03 . Memory (MB): peak = 512.0 ; gain = 10.0 ; free physical = 1000.0 ; free virtual = 2000.0";

    #[test]
    fn empty_line() {
        assert_eq!(classify(""), Message::None);
    }

    #[test]
    fn unrecognized_lines() {
        let lines = [
            "****** Vivado v2023.2 (64-bit)",
            "  **** SW Build 4029153 on Fri Oct 13 20:13:54 MDT 2023",
            "#",
            "# ",
            "#x",
            "# Synth_design",
            "# 1",
            "Phase 1 Initialization",
            "Time (s)",
            "WARNING [Synth 8-1] missing colon",
            "Info: [Synth 8-1] wrong case",
            " ",
            "\n",
        ];
        for line in lines {
            let msg = classify(line);
            assert_eq!(msg, Message::None, "line {:?}", line);
            assert_eq!(msg.body(), "");
        }
    }

    #[test]
    fn command() {
        assert_eq!(
            classify("# do_something"),
            Message::Command {
                body: String::from("do_something")
            }
        );
        assert_eq!(
            classify("# read_verilog -sv ./rtl/top.sv  \n"),
            Message::Command {
                body: String::from("read_verilog -sv ./rtl/top.sv")
            }
        );
        // shortest possible command
        assert_eq!(
            classify("# a"),
            Message::Command {
                body: String::from("a")
            }
        );
    }

    #[test]
    fn command_takes_priority_over_tags() {
        let msg = classify("# puts \"ERROR: [Common 17-1] not really\"");
        assert_eq!(msg.kind(), Kind::Command);
    }

    #[test]
    fn step_body_is_discarded() {
        assert_eq!(classify("Starting Synthesis"), Message::Phase(Phase::default()));
        let msg = classify("Starting Placer Task");
        assert_eq!(msg.kind(), Kind::Phase);
        assert_eq!(msg.body(), "");
        // prefix match only
        assert_eq!(classify("Starting"), Message::Phase(Phase::default()));
    }

    #[test]
    fn system() {
        assert_eq!(
            classify(SYSTEM_LINE),
            Message::System(Resources {
                cpu: String::from("00:01:02"),
                elapsed: String::from("00:02:03"),
                peak: String::from("512.0"),
                gain: String::from("10.0"),
                free_physical: String::from("1000.0"),
                free_virtual: String::from("2000.0"),
            })
        );
    }

    #[test]
    fn system_without_figures() {
        assert_eq!(
            classify("Time (s): cpu = n/a"),
            Message::System(Resources::default())
        );
    }

    #[test]
    fn phase() {
        assert_eq!(
            classify("Phase 1.2 Routing Placer\t| Checksum: a1b2c3"),
            Message::Phase(Phase {
                number: String::from("1.2"),
                body: String::from("Routing Placer"),
                checksum: String::from("a1b2c3"),
            })
        );
        assert_eq!(
            classify("Phase 2.1.1 Partition Driven Placement | Checksum: 1b7a7c2d9\n"),
            Message::Phase(Phase {
                number: String::from("2.1.1"),
                body: String::from("Partition Driven Placement"),
                checksum: String::from("1b7a7c2d9"),
            })
        );
    }

    #[test]
    fn phase_with_malformed_checksum() {
        assert_eq!(
            classify("Phase 3 Checksum pending"),
            Message::Phase(Phase::default())
        );
    }

    #[test]
    fn tagged() {
        assert_eq!(
            classify("WARNING: [Synth 8-123] signal unused"),
            Message::Warning(Tagged {
                code: String::from("Synth 8-123"),
                body: String::from("signal unused"),
            })
        );
        assert_eq!(
            classify("INFO: [Common 17-206] Exiting Vivado at Mon Jan  1 00:00:00 2024..."),
            Message::Info(Tagged {
                code: String::from("Common 17-206"),
                body: String::from("Exiting Vivado at Mon Jan  1 00:00:00 2024..."),
            })
        );
        assert_eq!(
            classify("ERROR: [Place 30-58] IO placement is infeasible. \n"),
            Message::Error(Tagged {
                code: String::from("Place 30-58"),
                body: String::from("IO placement is infeasible."),
            })
        );
    }

    #[test]
    fn code_is_kept_as_captured() {
        assert_eq!(
            classify("WARNING: [Synth 8-1 ] trailing  "),
            Message::Warning(Tagged {
                code: String::from("Synth 8-1 "),
                body: String::from("trailing"),
            })
        );
    }

    #[test]
    fn concurrent_calls_agree() {
        let lines = [
            "# route_design",
            "Starting Routing Task",
            SYSTEM_LINE,
            "Phase 4 Rip-up And Reroute | Checksum: 18e5c0a4f",
            "CRITICAL WARNING: [DRC 1-1] timing violation",
            "INFO: [Common 17-206] Exiting Vivado",
            "noise",
        ];
        let expected: Vec<Message> = lines.iter().map(|l| classify(l)).collect();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| lines.iter().map(|l| classify(l)).collect::<Vec<Message>>()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn critical_warning_is_a_warning() {
        let msg = classify("CRITICAL WARNING: [DRC 1-1] timing violation");
        assert_eq!(msg.kind(), Kind::Warning);
        assert_eq!(msg.code(), Some("DRC 1-1"));
        assert_eq!(msg.body(), "timing violation");
    }

    #[test]
    fn tagged_anywhere_in_line() {
        let msg = classify("[Tue 10:00] WARNING: [Vivado 12-584] No ports matched 'clk'.");
        assert_eq!(msg.kind(), Kind::Warning);
        assert_eq!(msg.code(), Some("Vivado 12-584"));
        assert_eq!(msg.body(), "No ports matched 'clk'.");
    }

    #[test]
    fn idempotent() {
        let lines = [
            "",
            "# opt_design",
            "Starting Routing Task",
            SYSTEM_LINE,
            "Phase 4 Rip-up And Reroute | Checksum: 18e5c0a4f",
            "ERROR: [Route 35-9] unroutable",
            "noise",
        ];
        for line in lines {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn multibyte_text_does_not_fault() {
        assert_eq!(classify("#é"), Message::None);
        assert_eq!(classify("# é"), Message::None);
        assert_eq!(classify("Ph"), Message::None);
        assert_eq!(
            classify("INFO: [Synth 8-1] signal “données” ignored").body(),
            "signal “données” ignored"
        );
    }
}
