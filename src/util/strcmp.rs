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

/// Compares to string references `s0` and `s1` with case conversion.
///
/// Returns `true` if they are deemed equivalent without regarding case sensivity.
pub fn cmp_ignore_case(s0: &str, s1: &str) -> bool {
    if s0.chars().count() != s1.chars().count() {
        return false;
    }
    s0.chars()
        .zip(s1.chars())
        .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ignores_case() {
        assert_eq!(cmp_ignore_case("CLK", "clk"), true);
        assert_eq!(cmp_ignore_case("clk_en", "clk"), false);
        assert_eq!(cmp_ignore_case("ab", "ba"), false);
        // VHDL-2008 LRM p226
        let s0 = "ABCDEFGHIJKLMNOPQRSTUVWXYZÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞ";
        let s1 = "abcdefghijklmnopqrstuvwxyzàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþ";
        assert_eq!(cmp_ignore_case(s0, s1), true);
        // these 2 letters do not have upper-case equivalents
        assert_eq!(cmp_ignore_case("ß", "ÿ"), false);
    }
}
