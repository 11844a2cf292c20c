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

//! Environment variables read by wavebench.

/// Directory holding the global `config.toml` file.
pub const WAVEBENCH_HOME: &str = "WAVEBENCH_HOME";
/// Path to the ghdl executable.
pub const WAVEBENCH_GHDL: &str = "WAVEBENCH_GHDL";
/// Path to the gtkwave executable.
pub const WAVEBENCH_GTKWAVE: &str = "WAVEBENCH_GTKWAVE";
/// Directory searched for the default component file.
pub const WAVEBENCH_WORKSPACE: &str = "WAVEBENCH_WORKSPACE";
pub const NO_COLOR: &str = "NO_COLOR";

/// Reads the environment variable `key`.
///
/// Variables that are unset, empty, or not valid unicode are treated as missing.
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
    fn read_missing() {
        assert_eq!(read("WAVEBENCH_SURELY_NOT_A_SET_VARIABLE"), None);
    }
}
