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

use std::fmt::Display;

/// Reserved words that shape a design unit's interface.
///
/// Any other reserved word is lexed as a basic identifier, which is harmless
/// for interface scanning since only these words guide the scanner.
#[derive(Debug, PartialEq, Clone)]
pub enum Keyword {
    Architecture,
    Begin,
    Buffer,
    Bus,
    Component,
    Constant,
    Downto,
    End,
    Entity,
    Generic,
    In,
    Inout,
    Is,
    Linkage,
    Map,
    Of,
    Others,
    Out,
    Package,
    Port,
    Range,
    Signal,
    To,
}

impl Keyword {
    /// Attempts to match the given string of characters `s` to a VHDL keyword.
    ///
    /// Compares `s` against keywords using ascii lowercase.
    pub fn match_keyword(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_ref() {
            "architecture" => Self::Architecture,
            "begin" => Self::Begin,
            "buffer" => Self::Buffer,
            "bus" => Self::Bus,
            "component" => Self::Component,
            "constant" => Self::Constant,
            "downto" => Self::Downto,
            "end" => Self::End,
            "entity" => Self::Entity,
            "generic" => Self::Generic,
            "in" => Self::In,
            "inout" => Self::Inout,
            "is" => Self::Is,
            "linkage" => Self::Linkage,
            "map" => Self::Map,
            "of" => Self::Of,
            "others" => Self::Others,
            "out" => Self::Out,
            "package" => Self::Package,
            "port" => Self::Port,
            "range" => Self::Range,
            "signal" => Self::Signal,
            "to" => Self::To,
            _ => return None,
        })
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Architecture => "architecture",
            Self::Begin => "begin",
            Self::Buffer => "buffer",
            Self::Bus => "bus",
            Self::Component => "component",
            Self::Constant => "constant",
            Self::Downto => "downto",
            Self::End => "end",
            Self::Entity => "entity",
            Self::Generic => "generic",
            Self::In => "in",
            Self::Inout => "inout",
            Self::Is => "is",
            Self::Linkage => "linkage",
            Self::Map => "map",
            Self::Of => "of",
            Self::Others => "others",
            Self::Out => "out",
            Self::Package => "package",
            Self::Port => "port",
            Self::Range => "range",
            Self::Signal => "signal",
            Self::To => "to",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn match_ignores_case() {
        assert_eq!(Keyword::match_keyword("ENTITY"), Some(Keyword::Entity));
        assert_eq!(Keyword::match_keyword("Port"), Some(Keyword::Port));
        assert_eq!(Keyword::match_keyword("std_logic"), None);
        assert_eq!(Keyword::Downto.to_string(), "downto");
    }
}
