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

pub const VIVLOG_HOME: &str = "VIVLOG_HOME";
pub const NO_COLOR: &str = "NO_COLOR";

/// Name of the home directory when `VIVLOG_HOME` is not set.
pub const HOME_DIR_NAME: &str = ".vivlog";

/// Reads a variable from the process environment.
///
/// Returns `None` if the variable is unset or empty.
pub fn read(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if v.is_empty() == false => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_unset_variable() {
        assert_eq!(read("VIVLOG_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
