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

use super::classifier;
use super::message::{Kind, Message};
use crate::error::{Error, Hint, LastError};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::path::Path;

/// Messages of an entire log grouped by their kind.
///
/// Each bucket keeps the order in which its messages appeared in the log.
#[derive(Debug, PartialEq, Default)]
pub struct Summary {
    buckets: [Vec<Message>; 7],
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every line in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().fold(Self::new(), |mut acc, line| {
            acc.push(classifier::classify(line.as_ref()));
            acc
        })
    }

    /// Reads a saved tool log and classifies each of its lines.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a log saved with the raw
    /// tool output can always be read back.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if path.is_file() == false {
            return Err(Error::LogNotFound(path.to_path_buf(), Hint::SaveLog));
        }
        let bytes = std::fs::read(path)
            .map_err(|e| Error::LogUnreadable(path.to_path_buf(), LastError(e.to_string())))?;
        Ok(Self::from_lines(String::from_utf8_lossy(&bytes).lines()))
    }

    /// Appends `msg` to the end of its kind's bucket.
    pub fn push(&mut self, msg: Message) {
        self.buckets[msg.kind().index()].push(msg);
    }

    pub fn get(&self, kind: Kind) -> &[Message] {
        &self.buckets[kind.index()]
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.buckets[kind.index()].len()
    }

    /// Number of lines that were classified.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// Iterates over the buckets in order.
    pub fn iter(&self) -> impl Iterator<Item = (Kind, &[Message])> {
        Kind::ALL
            .into_iter()
            .zip(self.buckets.iter().map(|b| b.as_slice()))
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Kind::ALL.len()))?;
        for (kind, bucket) in self.iter() {
            map.serialize_entry(kind.as_str(), bucket)?;
        }
        map.end()
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<12}{}", "Kind", "Count")?;
        writeln!(f, "{:<12}{}", "------", "-----")?;
        for (kind, bucket) in self.iter() {
            writeln!(f, "{:<12}{}", kind.as_str(), bucket.len())?;
        }
        write!(f, "{:<12}{}", "total", self.total())
    }
}
