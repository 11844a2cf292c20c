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
use std::iter::Peekable;

/// Splits source text into positioned tokens, keeping lexical errors in place
/// so the caller can decide whether to report or skip them.
pub trait Tokenize {
    type TokenType;
    type Err;

    fn tokenize(s: &str) -> Vec<Result<Token<Self::TokenType>, TokenError<Self::Err>>>
    where
        <Self as Tokenize>::Err: Display;
}

/// A token along with where it starts in the source text.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<T> {
    position: Position,
    ttype: T,
}

impl<T> Token<T> {
    pub fn new(ttype: T, loc: Position) -> Self {
        Self {
            position: loc,
            ttype: ttype,
        }
    }

    pub fn take(self) -> T {
        self.ttype
    }

    #[cfg(test)]
    pub fn locate(&self) -> &Position {
        &self.position
    }

    pub fn as_ref(&self) -> &T {
        &self.ttype
    }
}

#[derive(Debug, PartialEq)]
pub struct TokenError<T: Display> {
    position: Position,
    err: T,
}

impl<T: Display> TokenError<T> {
    pub fn new(err: T, loc: Position) -> Self {
        Self {
            position: loc,
            err: err,
        }
    }
}

impl<T: Display> Display for TokenError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.err)
    }
}

/// A line and column within source text. Lines count from 1 and columns from 0,
/// so the first character read sits at column 1.
#[derive(Debug, PartialEq, Clone, PartialOrd, Ord, Eq)]
pub struct Position {
    line: usize,
    col: usize,
}

impl Position {
    pub fn new() -> Self {
        Self::place(1, 0)
    }

    pub fn place(line: usize, col: usize) -> Self {
        Self {
            line: line,
            col: col,
        }
    }

    pub fn next_col(&mut self) {
        self.col += 1;
    }

    /// Moves past the character `c`, wrapping to the next line on a newline.
    pub fn step(&mut self, c: &char) {
        match c {
            '\n' => {
                self.line += 1;
                self.col = 0;
            }
            _ => self.next_col(),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}:{}", self.line, self.col)
    }
}

/// Walks the characters of source text while tracking the current position.
pub struct Cursor<T>
where
    T: Iterator<Item = char>,
{
    chars: Peekable<T>,
    loc: Position,
}

impl<T> Cursor<T>
where
    T: Iterator<Item = char>,
{
    pub fn new(s: T) -> Self {
        Self {
            chars: s.peekable(),
            loc: Position::new(),
        }
    }

    /// Takes the next character and advances the position past it.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.loc.step(&c);
        Some(c)
    }

    pub fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Position of the last character consumed.
    pub fn locate(&self) -> &Position {
        &self.loc
    }

    /// The characters not yet consumed.
    pub fn remaining(&self) -> &Peekable<T> {
        &self.chars
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn moving_position() {
        let mut pos = Position::new();
        assert_eq!(pos, Position::place(1, 0));
        pos.next_col();
        assert_eq!(pos, Position::place(1, 1));
        pos.step(&'\n');
        assert_eq!(pos, Position::place(2, 0));
        assert_eq!(pos.to_string(), ":2:0");
    }

    #[test]
    fn cursor_tracks_lines() {
        let mut cur = Cursor::new("ab\ncd".chars());
        assert_eq!(cur.consume(), Some('a'));
        assert_eq!(cur.consume(), Some('b'));
        assert_eq!(cur.consume(), Some('\n'));
        assert_eq!(cur.locate(), &Position::place(2, 0));
        assert_eq!(cur.peek(), Some(&'c'));
        assert_eq!(cur.remaining().clone().collect::<String>(), "cd");
    }
}
