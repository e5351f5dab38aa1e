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

use crate::error::Error;
use serde_derive::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// The category a single line of tool output falls into.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Warning,
    Error,
    Info,
    System,
    None,
    Command,
    Phase,
}

impl Kind {
    /// Every kind in bucket order.
    pub const ALL: [Kind; 7] = [
        Kind::Warning,
        Kind::Error,
        Kind::Info,
        Kind::System,
        Kind::None,
        Kind::Command,
        Kind::Phase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::System => "system",
            Self::None => "none",
            Self::Command => "command",
            Self::Phase => "phase",
        }
    }

    /// Position of the kind's bucket within [Kind::ALL].
    pub fn index(&self) -> usize {
        match self {
            Self::Warning => 0,
            Self::Error => 1,
            Self::Info => 2,
            Self::System => 3,
            Self::None => 4,
            Self::Command => 5,
            Self::Phase => 6,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "warning" => Self::Warning,
            "error" => Self::Error,
            "info" => Self::Info,
            "system" => Self::System,
            "none" => Self::None,
            "command" => Self::Command,
            "phase" => Self::Phase,
            _ => {
                return Err(Error::InvalidValue(
                    "message kind",
                    s.to_string(),
                    Kind::ALL.map(|k| k.as_str()).join(", "),
                ))
            }
        })
    }
}

/// Progress marker reported at the start or during a stage of the tool's flow.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct Phase {
    pub number: String,
    pub body: String,
    pub checksum: String,
}

/// Cpu time and memory figures reported after a tool command finishes.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct Resources {
    pub cpu: String,
    pub elapsed: String,
    pub peak: String,
    pub gain: String,
    pub free_physical: String,
    pub free_virtual: String,
}

/// A severity-tagged message, such as `WARNING: [Synth 8-327] ...`.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct Tagged {
    pub code: String,
    pub body: String,
}

/// A single classified line of tool output.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Command { body: String },
    Phase(Phase),
    System(Resources),
    Info(Tagged),
    Warning(Tagged),
    Error(Tagged),
    None,
}

impl Default for Message {
    fn default() -> Self {
        Self::None
    }
}

impl Message {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Command { .. } => Kind::Command,
            Self::Phase(_) => Kind::Phase,
            Self::System(_) => Kind::System,
            Self::Info(_) => Kind::Info,
            Self::Warning(_) => Kind::Warning,
            Self::Error(_) => Kind::Error,
            Self::None => Kind::None,
        }
    }

    /// References the free text payload, which is empty for kinds that do not
    /// carry one.
    pub fn body(&self) -> &str {
        match self {
            Self::Command { body } => body,
            Self::Phase(p) => &p.body,
            Self::Info(t) | Self::Warning(t) | Self::Error(t) => &t.body,
            Self::System(_) | Self::None => "",
        }
    }

    /// References the subsystem code for severity-tagged messages.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Info(t) | Self::Warning(t) | Self::Error(t) => Some(&t.code),
            _ => None,
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command { body } => write!(f, "{}", body),
            Self::Phase(p) => match p.number.is_empty() {
                true => write!(f, "phase"),
                false => write!(f, "phase {}: {} [{}]", p.number, p.body, p.checksum),
            },
            Self::System(r) => write!(
                f,
                "cpu = {} ; elapsed = {} ; peak = {} MB ; gain = {} MB ; free physical = {} MB ; free virtual = {} MB",
                r.cpu, r.elapsed, r.peak, r.gain, r.free_physical, r.free_virtual
            ),
            Self::Info(t) | Self::Warning(t) | Self::Error(t) => {
                write!(f, "{}: [{}] {}", self.kind(), t.code, t.body)
            }
            Self::None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_from_str() {
        assert_eq!(Kind::from_str("warning").unwrap(), Kind::Warning);
        assert_eq!(Kind::from_str("phase").unwrap(), Kind::Phase);
        assert_eq!(Kind::from_str("WARNING").is_err(), true);
        assert_eq!(Kind::from_str("critical").is_err(), true);
    }

    #[test]
    fn kind_index_matches_order() {
        Kind::ALL
            .iter()
            .enumerate()
            .for_each(|(i, k)| assert_eq!(k.index(), i));
    }

    #[test]
    fn body_and_code() {
        let msg = Message::Error(Tagged {
            code: String::from("Route 35-9"),
            body: String::from("unroutable nets"),
        });
        assert_eq!(msg.kind(), Kind::Error);
        assert_eq!(msg.body(), "unroutable nets");
        assert_eq!(msg.code(), Some("Route 35-9"));

        let msg = Message::System(Resources::default());
        assert_eq!(msg.body(), "");
        assert_eq!(msg.code(), None);
        assert_eq!(Message::default(), Message::None);
    }

    #[test]
    fn display() {
        let msg = Message::Phase(Phase {
            number: String::from("2.3"),
            body: String::from("Global Placement Core"),
            checksum: String::from("16c1a3b1e"),
        });
        assert_eq!(msg.to_string(), "phase 2.3: Global Placement Core [16c1a3b1e]");
        assert_eq!(Message::Phase(Phase::default()).to_string(), "phase");
        let msg = Message::Warning(Tagged {
            code: String::from("DRC 1-1"),
            body: String::from("timing violation"),
        });
        assert_eq!(msg.to_string(), "warning: [DRC 1-1] timing violation");
        assert_eq!(Message::None.to_string(), "");
    }

    #[test]
    fn serialize_with_type_tag() {
        let msg = Message::Command {
            body: String::from("synth_design -top top"),
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"type":"command","body":"synth_design -top top"}"#
        );
        assert_eq!(
            serde_json::to_string(&Message::None).unwrap(),
            r#"{"type":"none"}"#
        );
        let msg = Message::Warning(Tagged {
            code: String::from("DRC 1-1"),
            body: String::from("timing violation"),
        });
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"type":"warning","code":"DRC 1-1","body":"timing violation"}"#
        );
    }
}
