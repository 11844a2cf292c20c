/// Character classes of the VHDL character set (ISO/IEC 8859-1).
pub mod char_set {
    pub const DOUBLE_QUOTE: char = '\"';
    pub const BACKSLASH: char = '\\';
    pub const STAR: char = '*';
    pub const DASH: char = '-';
    pub const FWDSLASH: char = '/';
    pub const UNDERLINE: char = '_';
    pub const SINGLE_QUOTE: char = '\'';
    pub const DOT: char = '.';
    pub const HASH: char = '#';
    pub const PLUS: char = '+';

    pub fn is_digit(c: &char) -> bool {
        c.is_ascii_digit()
    }

    /// Upper and lower case letters, including the accented Latin-1 letters
    /// but not the multiplication and division signs.
    pub fn is_letter(c: &char) -> bool {
        match c {
            '\u{00D7}' | '\u{00F7}' => false,
            'A'..='Z' | 'a'..='z' | '\u{00C0}'..='\u{00FF}' => true,
            _ => false,
        }
    }

    pub fn is_letter_or_digit(c: &char) -> bool {
        is_digit(c) || is_letter(c)
    }

    /// Any printable character, spaces included.
    pub fn is_graphic(c: &char) -> bool {
        match c {
            ' '..='~' | '\u{00A0}'..='\u{00FF}' => true,
            _ => false,
        }
    }

    /// Spaces and format effectors.
    pub fn is_separator(c: &char) -> bool {
        match c {
            ' ' | '\u{00A0}' | '\t' | '\u{000B}' | '\r' | '\n' => true,
            _ => false,
        }
    }
}

use super::super::super::lexer::{Position, Token, TokenError, Cursor};
use super::super::error::VhdlError;
use super::VhdlToken;
use crate::core::lang::lexer::Tokenize;

type TokenResult = Result<Token<VhdlToken>, TokenError<VhdlError>>;

/// Lexical view of a VHDL source file.
pub struct VhdlTokenizer {
    tokens: Vec<TokenResult>,
}

impl VhdlTokenizer {
    /// Generates a `VhdlTokenizer` struct from source code `s`.
    pub fn from_source_code(s: &str) -> Self {
        Self {
            tokens: Self::tokenize(s),
        }
    }

    /// Transforms the list of results into a list of tokens, silently skipping over
    /// errors.
    ///
    /// This `fn` also filters out `Comment`s.
    pub fn into_tokens(self) -> Vec<Token<VhdlToken>> {
        self.tokens
            .into_iter()
            .filter_map(|f| match f {
                Ok(t) => match t.as_ref() {
                    VhdlToken::Comment(_) => None,
                    _ => Some(t),
                },
                Err(_) => None,
            })
            .collect()
    }

    /// References the lexical errors encountered while tokenizing.
    #[cfg(test)]
    pub fn errors(&self) -> Vec<&TokenError<VhdlError>> {
        self.tokens
            .iter()
            .filter_map(|f| f.as_ref().err())
            .collect()
    }
}

/// Checks if the previously captured token was a delimiter, which decides if a
/// single quote opens a character literal or acts as an attribute tick.
fn follows_delimiter(tokens: &[TokenResult]) -> bool {
    match tokens.last() {
        Some(Ok(tk)) => tk.as_ref().is_delimiter(),
        _ => false,
    }
}

fn wrap(result: Result<VhdlToken, VhdlError>, loc: Position, end: &Position) -> TokenResult {
    match result {
        Ok(tk) => Ok(Token::new(tk, loc)),
        Err(e) => Err(TokenError::new(e, end.clone())),
    }
}

impl Tokenize for VhdlTokenizer {
    type TokenType = VhdlToken;
    type Err = VhdlError;

    fn tokenize(s: &str) -> Vec<Result<Token<Self::TokenType>, TokenError<Self::Err>>> {
        let mut cursor = Cursor::new(s.chars());
        let mut tokens: Vec<TokenResult> = Vec::new();
        // consume every character (lexical analysis)
        while let Some(c) = cursor.consume() {
            // skip over whitespace
            if char_set::is_separator(&c) {
                continue;
            }
            let tk_loc = cursor.locate().clone();
            let result = if char_set::is_letter(&c) {
                VhdlToken::consume_word(&mut cursor, c)
            } else if c == char_set::BACKSLASH {
                VhdlToken::consume_extended_identifier(&mut cursor)
            } else if c == char_set::DOUBLE_QUOTE {
                VhdlToken::consume_str_lit(&mut cursor)
            } else if c == char_set::SINGLE_QUOTE && follows_delimiter(&tokens) {
                VhdlToken::consume_char_lit(&mut cursor)
            } else if char_set::is_digit(&c) {
                VhdlToken::consume_numeric(&mut cursor, c)
            } else if c == char_set::DASH && cursor.peek() == Some(&char_set::DASH) {
                VhdlToken::consume_comment(&mut cursor)
            } else if c == char_set::FWDSLASH && cursor.peek() == Some(&char_set::STAR) {
                VhdlToken::consume_delim_comment(&mut cursor)
            } else {
                VhdlToken::collect_delimiter(&mut cursor, c)
            };
            tokens.push(wrap(result, tk_loc, cursor.locate()));
        }
        // push final EOF token
        let mut tk_loc = cursor.locate().clone();
        tk_loc.next_col();
        tokens.push(Ok(Token::new(VhdlToken::EOF, tk_loc)));
        tokens
    }
}
