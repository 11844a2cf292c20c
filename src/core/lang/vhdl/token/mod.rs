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

use super::super::lexer::Cursor;
use std::fmt::Debug;
use std::fmt::Display;

pub mod comment;
pub mod delimiter;
pub mod identifier;
pub mod keyword;
pub mod literal;
pub mod tokenizer;

use literal::{AbstLiteral, BitStrLiteral, Character};
pub(crate) use tokenizer::char_set;

pub type Identifier = identifier::Identifier;
pub type Comment = comment::Comment;
pub type Keyword = keyword::Keyword;
pub type Delimiter = delimiter::Delimiter;
pub type VhdlTokenizer = tokenizer::VhdlTokenizer;
pub type VhdlError = super::error::VhdlError;

#[derive(Debug, PartialEq, Clone)]
pub enum VhdlToken {
    Comment(Comment),
    Identifier(Identifier), // can be general or extended (case-sensitive) identifier
    AbstLiteral(AbstLiteral),
    CharLiteral(Character),
    StrLiteral(String),
    BitStrLiteral(BitStrLiteral),
    Keyword(Keyword),
    Delimiter(Delimiter),
    EOF,
}

impl Display for VhdlToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Comment(note) => note.to_string(),
                Self::Identifier(id) => id.to_string(),
                Self::AbstLiteral(a) => a.to_string(),
                Self::CharLiteral(c) => c.to_string(),
                Self::StrLiteral(s) => format!("\"{}\"", s),
                Self::BitStrLiteral(b) => b.to_string(),
                Self::Keyword(kw) => kw.to_string(),
                Self::Delimiter(d) => d.to_string(),
                Self::EOF => String::new(),
            }
        )
    }
}

impl VhdlToken {
    /// Takes the identifier from the token.
    pub fn take_identifier(self) -> Option<Identifier> {
        match self {
            Self::Identifier(i) => Some(i),
            _ => None,
        }
    }

    /// Casts into a keyword.
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Self::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Checks if the current token type `self` is a delimiter.
    pub fn is_delimiter(&self) -> bool {
        match self {
            Self::Delimiter(_) => true,
            _ => false,
        }
    }

    /// Accesses the underlying `Identifier`, if one exists.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            VhdlToken::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Checks if the element is a particular keyword `kw`.
    pub fn check_keyword(&self, kw: &Keyword) -> bool {
        match self {
            VhdlToken::Keyword(r) => r == kw,
            _ => false,
        }
    }

    /// Checks if the element is a particular delimiter `d`.
    pub fn check_delimiter(&self, d: &Delimiter) -> bool {
        match self {
            VhdlToken::Delimiter(r) => r == d,
            _ => false,
        }
    }
}

impl VhdlToken {
    /// Attempts to match a string `s` to a valid delimiter.
    pub fn match_delimiter(s: &str) -> Result<Self, VhdlError> {
        match Delimiter::transform(s) {
            Some(d) => Ok(VhdlToken::Delimiter(d)),
            None => Err(VhdlError::Invalid(s.to_string())),
        }
    }

    /// Captures VHDL Tokens: keywords, basic identifiers, and regular bit string literals.
    ///
    /// Assumes the first `letter` char was the last char consumed before the function call.
    pub fn consume_word(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
        c0: char,
    ) -> Result<VhdlToken, VhdlError> {
        let mut word = Self::consume_value_pattern(cursor, Some(c0), char_set::is_letter_or_digit)?;
        match Keyword::match_keyword(&word) {
            Some(kw) => Ok(VhdlToken::Keyword(kw)),
            None => {
                // bit string literal: the next char is a double quote
                if cursor.peek() == Some(&char_set::DOUBLE_QUOTE) {
                    word.push(cursor.consume().unwrap());
                    return Self::consume_bit_str_literal(cursor, word);
                }
                Ok(VhdlToken::Identifier(Identifier::Basic(word)))
            }
        }
    }

    /// Captures VHDL Tokens that begin with a digit: decimal literals, based
    /// literals, and bit string literals with a leading length.
    ///
    /// Assumes the incoming char `c0` was the last char consumed.
    pub fn consume_numeric(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
        c0: char,
    ) -> Result<VhdlToken, VhdlError> {
        let mut number = Self::consume_value_pattern(cursor, Some(c0), char_set::is_digit)?;
        let mut based = false;
        match cursor.peek() {
            // decimal_literal with a fractional part
            Some(&char_set::DOT) => {
                number.push(cursor.consume().unwrap());
                let fraction = Self::consume_value_pattern(cursor, None, char_set::is_digit)?;
                if fraction.is_empty() {
                    return Err(VhdlError::Any(String::from(
                        "cannot have trailing decimal point",
                    )));
                }
                number.push_str(&fraction);
            }
            // based_literal
            Some(&char_set::HASH) => {
                based = true;
                number.push(cursor.consume().unwrap());
                loop {
                    match cursor.consume() {
                        Some(char_set::HASH) => {
                            number.push(char_set::HASH);
                            break;
                        }
                        Some(c) if char_set::is_letter_or_digit(&c) || c == char_set::DOT => {
                            number.push(c)
                        }
                        Some(c) if c == char_set::UNDERLINE => number.push(c),
                        _ => return Err(VhdlError::Any(String::from("expecting closing '#'"))),
                    }
                }
            }
            // bit string literal such as 8x"FF"
            Some(c) if c != &'e' && c != &'E' && char_set::is_letter(c) => {
                let base_spec =
                    Self::consume_value_pattern(cursor, None, char_set::is_letter)?;
                number.push_str(&base_spec);
                // a physical literal written without a space, such as 10ns
                if cursor.peek() != Some(&char_set::DOUBLE_QUOTE) {
                    return Ok(VhdlToken::AbstLiteral(AbstLiteral::Decimal(number)));
                }
                number.push(cursor.consume().unwrap());
                return Self::consume_bit_str_literal(cursor, number);
            }
            _ => (),
        }
        // gather exponent
        if let Some(c) = cursor.peek() {
            if c == &'e' || c == &'E' {
                number.push(cursor.consume().unwrap());
                if let Some(sign) = cursor.peek() {
                    if sign == &char_set::PLUS || sign == &char_set::DASH {
                        number.push(cursor.consume().unwrap());
                    }
                }
                let value = Self::consume_value_pattern(cursor, None, char_set::is_digit)?;
                if value.is_empty() {
                    return Err(VhdlError::Any(String::from(
                        "expecting an integer exponent value but got nothing",
                    )));
                }
                number.push_str(&value);
            }
        }
        Ok(VhdlToken::AbstLiteral(match based {
            true => AbstLiteral::Based(number),
            false => AbstLiteral::Decimal(number),
        }))
    }

    /// Captures the remaining characters for a bit string literal.
    ///
    /// Assumes the integer, base_specifier, and first " char are already consumed
    /// and moved as `s0`.
    pub fn consume_bit_str_literal(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
        s0: String,
    ) -> Result<VhdlToken, VhdlError> {
        let mut literal = s0;
        while let Some(c) = cursor.consume() {
            literal.push(c);
            if c == char_set::DOUBLE_QUOTE {
                return Ok(VhdlToken::BitStrLiteral(BitStrLiteral(literal)));
            } else if char_set::is_graphic(&c) == false {
                break;
            }
        }
        Err(VhdlError::Any(String::from(
            "expecting closing double quote for bit string literal",
        )))
    }

    /// Captures an extended identifier token.
    ///
    /// Errors if the identifier is empty.
    pub fn consume_extended_identifier(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        let id = Self::consume_literal(cursor, &char_set::BACKSLASH)?;
        if id.is_empty() {
            Err(VhdlError::Any(String::from(
                "extended identifier cannot be empty",
            )))
        } else {
            Ok(VhdlToken::Identifier(Identifier::Extended(id)))
        }
    }

    /// Captures a character literal.
    ///
    /// Assumes the first single quote '\'' was the last char consumed.
    pub fn consume_char_lit(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        let c = match cursor.consume() {
            Some(c) if char_set::is_graphic(&c) => c,
            _ => return Err(VhdlError::Any(String::from("char not graphic"))),
        };
        match cursor.consume() {
            Some(char_set::SINGLE_QUOTE) => Ok(VhdlToken::CharLiteral(Character(c.to_string()))),
            _ => Err(VhdlError::Any(String::from(
                "expecting a closing single quote",
            ))),
        }
    }

    /// Captures a string literal.
    ///
    /// Assumes the first double quote '\"' was the last char consumed before entering the function.
    pub fn consume_str_lit(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        let value = Self::consume_literal(cursor, &char_set::DOUBLE_QUOTE)?;
        Ok(VhdlToken::StrLiteral(value))
    }

    /// Collects a delimited comment (all characters after a `/*` up until `*/`).
    ///
    /// Assumes the opening '/' char was the last char consumed and the next char is '*'.
    pub fn consume_delim_comment(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        // skip over opening '*'
        cursor.consume();
        let mut note = String::new();
        while let Some(c) = cursor.consume() {
            if c == char_set::STAR && cursor.peek() == Some(&char_set::FWDSLASH) {
                cursor.consume();
                return Ok(VhdlToken::Comment(Comment::Delimited(note)));
            }
            note.push(c);
        }
        Err(VhdlError::Any(String::from("missing closing delimiter */")))
    }

    /// Collects a single-line comment (all characters after a `--` up until end-of-line).
    ///
    /// Assumes the opening '-' was the last char consumed and the next char is '-'.
    pub fn consume_comment(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        // skip over second '-'
        cursor.consume();
        let mut note = String::new();
        while let Some(c) = cursor.consume() {
            // cannot be vt, cr (\r), lf (\n)
            if c == '\u{000B}' || c == '\u{000D}' || c == '\u{000A}' {
                break;
            }
            note.push(c);
        }
        Ok(VhdlToken::Comment(Comment::Single(note)))
    }

    /// Collects a delimiter, preferring the two-character form when one exists.
    pub fn collect_delimiter(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
        c0: char,
    ) -> Result<VhdlToken, VhdlError> {
        if let Some(c1) = cursor.peek() {
            let pair: String = [c0, *c1].iter().collect();
            if let Ok(op) = Self::match_delimiter(&pair) {
                cursor.consume();
                return Ok(op);
            }
        }
        Self::match_delimiter(&c0.to_string())
    }

    /// Captures the generic pattern production rule by passing a fn as `eval` to compare.
    ///
    /// This function allows for an empty result to be returned as `Ok`.
    /// - A ::= A { \[ underline ] A }
    pub fn consume_value_pattern(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
        c0: Option<char>,
        eval: fn(&char) -> bool,
    ) -> Result<String, VhdlError> {
        let mut car = match c0 {
            Some(c) => String::from(c),
            None => String::new(),
        };
        while let Some(c) = cursor.peek() {
            if eval(c) == true {
                car.push(cursor.consume().unwrap());
            } else if c == &char_set::UNDERLINE {
                if car.is_empty() == true {
                    return Err(VhdlError::Any(String::from(
                        "expecting a character before underline",
                    )));
                }
                car.push(cursor.consume().unwrap());
                // a valid character must follow the underline
                match cursor.consume() {
                    Some(c_next) if eval(&c_next) => car.push(c_next),
                    _ => {
                        return Err(VhdlError::Any(String::from(
                            "expecting a character to follow underline",
                        )))
                    }
                }
            } else {
                break;
            }
        }
        Ok(car)
    }

    /// Walks through the stream to gather a `String` literal until finding the
    /// exiting character `br`.
    ///
    /// An escape is allowed by double placing the `br`, i.e. """hello"" world".
    pub fn consume_literal(
        cursor: &mut Cursor<impl Iterator<Item = char>>,
        br: &char,
    ) -> Result<String, VhdlError> {
        let mut result = String::new();
        while let Some(c) = cursor.consume() {
            if char_set::is_graphic(&c) == false {
                return Err(VhdlError::Any(String::from("invalid character in literal")));
            }
            // detect escape sequence
            if br == &c {
                match cursor.peek() {
                    Some(c_next) if br == c_next => {
                        cursor.consume();
                    }
                    _ => return Ok(result),
                }
            }
            result.push(c);
        }
        Err(VhdlError::Any(String::from("expecting closing delimiter")))
    }
}

/// Writes a sequence of tokens back into source text.
///
/// Tight delimiters such as parentheses and arithmetic operators are written
/// without surrounding whitespace, and commas hug the preceding token.
pub fn tokens_to_string(tokens: &[VhdlToken]) -> String {
    let mut result = String::new();
    let mut iter = tokens.iter().peekable();
    while let Some(t) = iter.next() {
        result.push_str(&t.to_string());
        let next = match iter.peek() {
            Some(n) => n,
            None => break,
        };
        let trailing_space = match t {
            VhdlToken::Delimiter(d) => d.is_tight() == false,
            _ => match next {
                VhdlToken::Delimiter(d) => d.is_tight() == false,
                _ => true,
            },
        };
        let hugs_left = match next {
            VhdlToken::Delimiter(d) => d == &Delimiter::Comma || d == &Delimiter::Terminator,
            _ => false,
        };
        if trailing_space == true && hugs_left == false {
            result.push(' ');
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::super::super::lexer::*;
    use super::*;

    #[test]
    fn lex_word() {
        let mut tc = Cursor::new("entity foo".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_word(&mut tc, c0),
            Ok(VhdlToken::Keyword(Keyword::Entity))
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), " foo");

        let mut tc = Cursor::new("data_in;".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_word(&mut tc, c0),
            Ok(VhdlToken::Identifier(Identifier::Basic(
                "data_in".to_owned()
            )))
        );
    }

    #[test]
    fn lex_partial_bit_str() {
        let mut tc = Cursor::new("x\"FF\"more text".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_word(&mut tc, c0),
            Ok(VhdlToken::BitStrLiteral(BitStrLiteral("x\"FF\"".to_owned())))
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), "more text");
    }

    #[test]
    fn lex_numeric() {
        let mut tc = Cursor::new("32)".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_numeric(&mut tc, c0).unwrap(),
            VhdlToken::AbstLiteral(AbstLiteral::Decimal("32".to_owned()))
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), ")");

        let mut tc = Cursor::new("6.023E+24".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_numeric(&mut tc, c0).unwrap(),
            VhdlToken::AbstLiteral(AbstLiteral::Decimal("6.023E+24".to_owned()))
        );

        let mut tc = Cursor::new("16#F_F#;".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_numeric(&mut tc, c0).unwrap(),
            VhdlToken::AbstLiteral(AbstLiteral::Based("16#F_F#".to_owned()))
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), ";");

        let mut tc = Cursor::new("8x\"A5\";".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::consume_numeric(&mut tc, c0).unwrap(),
            VhdlToken::BitStrLiteral(BitStrLiteral("8x\"A5\"".to_owned()))
        );

        let mut tc = Cursor::new("1.".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(VhdlToken::consume_numeric(&mut tc, c0).is_err(), true);
    }

    #[test]
    fn lex_comments() {
        let mut tc = Cursor::new("--here is a comment\nentity".chars());
        tc.consume();
        assert_eq!(
            VhdlToken::consume_comment(&mut tc).unwrap(),
            VhdlToken::Comment(Comment::Single("here is a comment".to_owned()))
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), "entity");
        assert_eq!(tc.locate(), &Position::place(2, 0));

        let mut tc = Cursor::new("/* multi\nline */;".chars());
        tc.consume();
        assert_eq!(
            VhdlToken::consume_delim_comment(&mut tc).unwrap(),
            VhdlToken::Comment(Comment::Delimited(" multi\nline ".to_owned()))
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), ";");

        let mut tc = Cursor::new("/* never closed".chars());
        tc.consume();
        assert_eq!(VhdlToken::consume_delim_comment(&mut tc).is_err(), true);
    }

    #[test]
    fn lex_literals() {
        let mut tc = Cursor::new("1';".chars());
        assert_eq!(
            VhdlToken::consume_char_lit(&mut tc).unwrap(),
            VhdlToken::CharLiteral(Character("1".to_owned()))
        );
        let mut tc = Cursor::new("say \"\"hi\"\"\" rest".chars());
        assert_eq!(
            VhdlToken::consume_str_lit(&mut tc).unwrap(),
            VhdlToken::StrLiteral("say \"hi\"".to_owned())
        );
        assert_eq!(tc.remaining().clone().collect::<String>(), " rest");
    }

    #[test]
    fn lex_delimiters() {
        let mut tc = Cursor::new("= '1'".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::collect_delimiter(&mut tc, c0).unwrap(),
            VhdlToken::Delimiter(Delimiter::Eq)
        );
        let mut tc = Cursor::new(":= '0'".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::collect_delimiter(&mut tc, c0).unwrap(),
            VhdlToken::Delimiter(Delimiter::VarAssign)
        );
        let mut tc = Cursor::new("=>".chars());
        let c0 = tc.consume().unwrap();
        assert_eq!(
            VhdlToken::collect_delimiter(&mut tc, c0).unwrap(),
            VhdlToken::Delimiter(Delimiter::Arrow)
        );
    }

    #[test]
    fn render_tokens() {
        let tokens = vec![
            VhdlToken::Identifier(Identifier::Basic("std_logic_vector".to_owned())),
            VhdlToken::Delimiter(Delimiter::ParenL),
            VhdlToken::Identifier(Identifier::Basic("WIDTH".to_owned())),
            VhdlToken::Delimiter(Delimiter::Dash),
            VhdlToken::AbstLiteral(AbstLiteral::Decimal("1".to_owned())),
            VhdlToken::Keyword(Keyword::Downto),
            VhdlToken::AbstLiteral(AbstLiteral::Decimal("0".to_owned())),
            VhdlToken::Delimiter(Delimiter::ParenR),
        ];
        assert_eq!(tokens_to_string(&tokens), "std_logic_vector(WIDTH-1 downto 0)");

        let tokens = vec![
            VhdlToken::Identifier(Identifier::Basic("integer".to_owned())),
            VhdlToken::Keyword(Keyword::Range),
            VhdlToken::AbstLiteral(AbstLiteral::Decimal("0".to_owned())),
            VhdlToken::Keyword(Keyword::To),
            VhdlToken::AbstLiteral(AbstLiteral::Decimal("7".to_owned())),
        ];
        assert_eq!(tokens_to_string(&tokens), "integer range 0 to 7");
    }
}
