use std::fmt::Display;

/// Punctuation recognized between words in VHDL source code.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Delimiter {
    Ampersand,
    SingleQuote,
    ParenL,
    ParenR,
    Star,
    Plus,
    Comma,
    Dash,
    Dot,
    FwdSlash,
    Colon,
    Terminator,
    Lt,
    Eq,
    Gt,
    Pipe,
    BrackL,
    BrackR,
    Question,
    AtSymbol,
    BackTick,
    Arrow,
    DoubleStar,
    VarAssign,
    Inequality,
    GTE,
    SigAssign,
    Box,
}

/// Every delimiter paired with its spelling. `!` is an alternate for `|`.
const SPELLINGS: [(&str, Delimiter); 28] = [
    ("&", Delimiter::Ampersand),
    ("'", Delimiter::SingleQuote),
    ("(", Delimiter::ParenL),
    (")", Delimiter::ParenR),
    ("*", Delimiter::Star),
    ("+", Delimiter::Plus),
    (",", Delimiter::Comma),
    ("-", Delimiter::Dash),
    (".", Delimiter::Dot),
    ("/", Delimiter::FwdSlash),
    (":", Delimiter::Colon),
    (";", Delimiter::Terminator),
    ("<", Delimiter::Lt),
    ("=", Delimiter::Eq),
    (">", Delimiter::Gt),
    ("|", Delimiter::Pipe),
    ("[", Delimiter::BrackL),
    ("]", Delimiter::BrackR),
    ("?", Delimiter::Question),
    ("@", Delimiter::AtSymbol),
    ("`", Delimiter::BackTick),
    ("=>", Delimiter::Arrow),
    ("**", Delimiter::DoubleStar),
    (":=", Delimiter::VarAssign),
    ("/=", Delimiter::Inequality),
    (">=", Delimiter::GTE),
    ("<=", Delimiter::SigAssign),
    ("<>", Delimiter::Box),
];

impl Delimiter {
    /// Matches the characters `s` to a delimiter.
    pub fn transform(s: &str) -> Option<Self> {
        let s = match s {
            "!" => "|",
            _ => s,
        };
        SPELLINGS.iter().find(|(text, _)| *text == s).map(|(_, d)| *d)
    }

    pub fn as_str(&self) -> &'static str {
        SPELLINGS
            .iter()
            .find(|(_, d)| d == self)
            .map(|(text, _)| *text)
            .unwrap_or_default()
    }

    /// Checks if the delimiter is written without surrounding whitespace when
    /// a token sequence is rendered back into text.
    pub fn is_tight(&self) -> bool {
        match self {
            Self::ParenL
            | Self::ParenR
            | Self::Dot
            | Self::SingleQuote
            | Self::Dash
            | Self::Plus
            | Self::Star
            | Self::FwdSlash => true,
            _ => false,
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spellings() {
        assert_eq!(Delimiter::transform(":="), Some(Delimiter::VarAssign));
        assert_eq!(Delimiter::transform("!"), Some(Delimiter::Pipe));
        assert_eq!(Delimiter::transform("=="), None);
        assert_eq!(Delimiter::Arrow.as_str(), "=>");
        assert_eq!(Delimiter::Pipe.to_string(), "|");
        for (text, d) in SPELLINGS.iter() {
            assert_eq!(Delimiter::transform(text), Some(*d));
        }
    }
}
