use super::super::super::lexer::Cursor;
use crate::core::lang::vhdl::token::char_set;
use crate::core::lang::vhdl::token::VhdlToken;
use crate::util::strcmp;
use serde::Serializer;
use std::fmt::Display;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

#[derive(Debug, Clone, PartialOrd, Ord)]
pub enum Identifier {
    Basic(String),
    Extended(String),
}

impl std::cmp::Eq for Identifier {}

impl Identifier {
    // Returns the reference to the inner `String` struct.
    fn as_str(&self) -> &str {
        match self {
            Self::Basic(id) => id.as_ref(),
            Self::Extended(id) => id.as_ref(),
        }
    }

    /// Modifies the ending of the identifier with `ext` and writes as a String
    pub fn into_extension(&self, ext: &str) -> Identifier {
        match self {
            Self::Basic(s) => Self::Basic(s.clone() + ext),
            Self::Extended(s) => Self::Extended(s.clone() + ext),
        }
    }

    /// Checks if `self` is an extended identifier or not.
    fn is_extended(&self) -> bool {
        match self {
            Self::Extended(_) => true,
            Self::Basic(_) => false,
        }
    }

    /// Number of characters the identifier occupies when written out.
    pub fn len(&self) -> usize {
        match self {
            Self::Basic(id) => id.chars().count(),
            Self::Extended(id) => {
                id.chars().count() + 2 + (id.chars().filter(|c| c == &'\\').count())
            }
        }
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Basic(id) => id.to_lowercase().hash(state),
            Self::Extended(id) => id.hash(state),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum IdentifierError {
    Empty,
    InvalidFirstChar(char),
    CharsAfterDelimiter(String),
}

impl std::error::Error for IdentifierError {}

impl std::fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty identifier"),
            Self::CharsAfterDelimiter(s) => write!(
                f,
                "characters \'{}\' found following closing extended backslash",
                s
            ),
            Self::InvalidFirstChar(c) => {
                write!(f, "first character must be letter but found \'{}\'", c)
            }
        }
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = Cursor::new(s.chars());
        match chars.consume() {
            Some('\\') => {
                let id = VhdlToken::consume_literal(&mut chars, &char_set::BACKSLASH)
                    .map_err(|_| Self::Err::Empty)?;
                // gather remaining characters
                let mut rem = String::new();
                while let Some(c) = chars.consume() {
                    rem.push(c);
                }
                match rem.is_empty() {
                    true => Ok(Self::Extended(id)),
                    false => Err(Self::Err::CharsAfterDelimiter(rem)),
                }
            }
            Some(c) => match char_set::is_letter(&c) {
                true => {
                    let word = VhdlToken::consume_value_pattern(
                        &mut chars,
                        Some(c),
                        char_set::is_letter_or_digit,
                    )
                    .map_err(|_| Self::Err::InvalidFirstChar(c))?;
                    // everything must be consumed to be a single identifier
                    match chars.remaining().clone().collect::<String>() {
                        rem if rem.is_empty() => Ok(Self::Basic(word)),
                        rem => Err(Self::Err::CharsAfterDelimiter(rem)),
                    }
                }
                false => Err(Self::Err::InvalidFirstChar(c)),
            },
            None => Err(Self::Err::Empty),
        }
    }
}

impl std::cmp::PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        // instantly not equal if not they are not of same type
        if self.is_extended() != other.is_extended() {
            return false;
        };
        // compare with case sensitivity
        if self.is_extended() == true {
            self.as_str() == other.as_str()
        // compare without case sensitivity
        } else {
            strcmp::cmp_ignore_case(self.as_str(), other.as_str())
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic(id) => write!(f, "{}", id),
            Self::Extended(id) => write!(f, "\\{}\\", id.replace('\\', r#"\\"#)),
        }
    }
}

impl serde::Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!(
            Identifier::from_str("top_level").unwrap(),
            Identifier::Basic("top_level".to_owned())
        );
        assert_eq!(
            Identifier::from_str("\\Top_LEVEL\\").unwrap(),
            Identifier::Extended("Top_LEVEL".to_owned())
        );
        // extra characters after closing
        assert_eq!(Identifier::from_str("\\Top_\\LEVEL\\").is_err(), true);
        assert_eq!(Identifier::from_str("9lives").is_err(), true);
        assert_eq!(Identifier::from_str("a b").is_err(), true);
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn basic_ignores_case() {
        let clk = Identifier::Basic("clk".to_owned());
        assert_eq!(clk, Identifier::Basic("CLK".to_owned()));
        assert_ne!(clk, Identifier::Extended("clk".to_owned()));
        assert_ne!(
            Identifier::Extended("Clk".to_owned()),
            Identifier::Extended("clk".to_owned())
        );
    }

    #[test]
    fn extension() {
        let id = Identifier::Basic("adder".to_owned());
        assert_eq!(id.into_extension("_tb").to_string(), "adder_tb");
        assert_eq!(id.len(), 5);
        assert_eq!(Identifier::Extended("a".to_owned()).len(), 3);
    }
}
