// @note: interface_signal_declaration ::= [signal] identifier_list : [ mode ] subtype_indication [ bus ] [ := static_expression ]
// @note: identifier_list ::= identifier { , identifier }

use super::token::{tokens_to_string, Delimiter, Identifier, Keyword, VhdlToken};
use serde_derive::Serialize;
use std::fmt::Display;
use std::iter::Peekable;

/// Data types driven by a single `'0'`/`'1'` character literal.
const SINGLE_BIT_TYPES: [&str; 3] = ["std_logic", "std_ulogic", "bit"];

#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Direction {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "inout")]
    Inout,
    #[serde(rename = "buffer")]
    Buffer,
}

impl Direction {
    fn from_keyword(kw: &Keyword) -> Option<Self> {
        Some(match kw {
            Keyword::In => Self::In,
            Keyword::Out => Self::Out,
            Keyword::Inout => Self::Inout,
            Keyword::Buffer => Self::Buffer,
            _ => return None,
        })
    }

    fn as_keyword(&self) -> Keyword {
        match self {
            Self::In => Keyword::In,
            Self::Out => Keyword::Out,
            Self::Inout => Keyword::Inout,
            Self::Buffer => Keyword::Buffer,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// The subtype indication of a port, written back as normalized source text.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DataType(String);

impl DataType {
    /// Checks if the type is one of the scalar logic types (`std_logic`,
    /// `std_ulogic`, `bit`), ignoring case.
    pub fn is_single_bit(&self) -> bool {
        SINGLE_BIT_TYPES
            .iter()
            .any(|t| t.eq_ignore_ascii_case(self.0.as_str()))
    }
}

impl From<&str> for DataType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Port {
    name: Identifier,
    direction: Direction,
    #[serde(rename = "type")]
    datatype: DataType,
}

impl Port {
    pub fn new(name: Identifier, direction: Direction, datatype: DataType) -> Self {
        Self {
            name: name,
            direction: direction,
            datatype: datatype,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    pub fn datatype(&self) -> &DataType {
        &self.datatype
    }

    pub fn is_single_bit(&self) -> bool {
        self.datatype.is_single_bit()
    }

    pub(crate) fn set_datatype(&mut self, datatype: DataType) {
        self.datatype = datatype;
    }

    /// Creates a line for a component's port clause.
    ///
    /// Note: `offset` is used for padding after the identifier string and before ':'.
    pub fn into_interface_string(&self, offset: usize) -> String {
        format!(
            "{}{}{} {} {}",
            self.name,
            pad(offset, &self.name),
            Delimiter::Colon,
            self.direction,
            self.datatype
        )
    }

    /// Creates a signal declaration to be copied into architecture declaration parts.
    ///
    /// Input signals receive an all-zero initial value.
    pub fn into_declaration_string(&self, offset: usize) -> String {
        let init = match self.direction {
            Direction::In => match self.is_single_bit() {
                true => String::from(" := '0'"),
                false => String::from(" := (others => '0')"),
            },
            _ => String::new(),
        };
        format!(
            "{} {}{}{} {}{}{}",
            Keyword::Signal,
            self.name,
            pad(offset, &self.name),
            Delimiter::Colon,
            self.datatype,
            init,
            Delimiter::Terminator
        )
    }

    /// Creates an instantiation line to be copied into an architecture region.
    pub fn into_instance_string(&self, offset: usize) -> String {
        format!(
            "{}{}{} {}",
            self.name,
            pad(offset, &self.name),
            Delimiter::Arrow,
            self.name
        )
    }
}

/// Whitespace to align the column following identifier `id` at `offset`.
fn pad(offset: usize, id: &Identifier) -> String {
    " ".repeat(offset.saturating_sub(id.len()) + 1)
}

/// Determines the length of the longest port identifier.
pub fn longest_identifier<'a>(ports: impl Iterator<Item = &'a Port>) -> usize {
    ports.map(|p| p.name.len()).max().unwrap_or(0)
}

#[derive(Debug, Clone)]
struct IdentifierList(Vec<Identifier>);

impl IdentifierList {
    fn from_tokens<I>(tokens: &mut Peekable<I>) -> Option<Self>
    where
        I: Iterator<Item = VhdlToken>,
    {
        let mut inner = vec![tokens.next()?.take_identifier()?];
        while let Some(tkn) = tokens.peek() {
            // continue on commas
            if tkn.check_delimiter(&Delimiter::Comma) == true {
                tokens.next();
                inner.push(tokens.next()?.take_identifier()?);
            } else {
                break;
            }
        }
        Some(Self(inner))
    }
}

#[derive(Debug, PartialEq)]
struct SubtypeIndication(Vec<VhdlToken>);

impl SubtypeIndication {
    fn from_tokens<I>(tokens: &mut Peekable<I>) -> Self
    where
        I: Iterator<Item = VhdlToken>,
    {
        let mut inner = Vec::new();
        while let Some(tkn) = tokens.peek() {
            // exit case: encounter 'bus' or ':=' delimiter
            if tkn.check_keyword(&Keyword::Bus) || tkn.check_delimiter(&Delimiter::VarAssign) {
                break;
            }
            if let Some(t) = tokens.next() {
                inner.push(t);
            }
        }
        Self(inner)
    }
}

/// Parses one `;`-separated fragment of a port clause into its ports.
///
/// Returns `None` when the fragment does not have the shape
/// `identifier_list : mode subtype_indication [bus] [:= expression]`.
pub fn ports_from_fragment(fragment: &[VhdlToken]) -> Option<Vec<Port>> {
    let mut tokens = fragment.iter().cloned().peekable();
    // skip optional 'signal' keyword
    if tokens.peek()?.check_keyword(&Keyword::Signal) == true {
        tokens.next();
    }
    let identifiers = IdentifierList::from_tokens(&mut tokens)?;
    // skip past ':' delimiter
    if tokens.next()?.check_delimiter(&Delimiter::Colon) == false {
        return None;
    }
    let direction = Direction::from_keyword(tokens.next()?.as_keyword()?)?;
    let subtype = SubtypeIndication::from_tokens(&mut tokens);
    if subtype.0.is_empty() == true {
        return None;
    }
    // anything left over must be 'bus' or a default value
    if let Some(tkn) = tokens.peek() {
        if tkn.check_keyword(&Keyword::Bus) == false
            && tkn.check_delimiter(&Delimiter::VarAssign) == false
        {
            return None;
        }
    }
    let datatype = DataType(tokens_to_string(&subtype.0));
    Some(
        identifiers
            .0
            .into_iter()
            .map(|id| Port::new(id, direction.clone(), datatype.clone()))
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::super::token::VhdlTokenizer;
    use super::*;

    fn fragment(s: &str) -> Vec<VhdlToken> {
        VhdlTokenizer::from_source_code(s)
            .into_tokens()
            .into_iter()
            .map(|t| t.take())
            .filter(|t| t != &VhdlToken::EOF)
            .collect()
    }

    fn basic(s: &str) -> Identifier {
        Identifier::Basic(s.to_string())
    }

    #[test]
    fn single_port() {
        let ports = ports_from_fragment(&fragment("EN : in std_logic")).unwrap();
        assert_eq!(
            ports,
            vec![Port::new(basic("EN"), Direction::In, DataType::from("std_logic"))]
        );
        assert_eq!(ports[0].is_single_bit(), true);
    }

    #[test]
    fn identifier_list_and_default() {
        let ports =
            ports_from_fragment(&fragment("a, b : in STD_LOGIC_VECTOR(7 DOWNTO 0) := x\"00\""))
                .unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[1].name(), &basic("b"));
        assert_eq!(
            ports[1].datatype(),
            &DataType::from("STD_LOGIC_VECTOR(7 downto 0)")
        );
        assert_eq!(ports[1].is_single_bit(), false);
    }

    #[test]
    fn bad_fragments() {
        // missing mode
        assert_eq!(ports_from_fragment(&fragment("a : std_logic")), None);
        // missing type
        assert_eq!(ports_from_fragment(&fragment("a : in")), None);
        // unsupported mode keyword
        assert_eq!(ports_from_fragment(&fragment("a : linkage bit")), None);
        assert_eq!(ports_from_fragment(&fragment("generic")), None);
    }

    #[test]
    fn single_bit_ignores_case() {
        assert_eq!(DataType::from("STD_ULOGIC").is_single_bit(), true);
        assert_eq!(DataType::from("Bit").is_single_bit(), true);
        assert_eq!(DataType::from("bit_vector(1 downto 0)").is_single_bit(), false);
        assert_eq!(DataType::from("unsigned(3 downto 0)").is_single_bit(), false);
    }

    #[test]
    fn aligned_strings() {
        let en = Port::new(basic("EN"), Direction::In, DataType::from("std_logic"));
        let data = Port::new(
            basic("data"),
            Direction::In,
            DataType::from("std_logic_vector(3 downto 0)"),
        );
        let q = Port::new(basic("Q"), Direction::Out, DataType::from("std_logic"));
        let offset = longest_identifier(vec![&en, &data, &q].into_iter());
        assert_eq!(offset, 4);
        assert_eq!(en.into_interface_string(offset), "EN   : in std_logic");
        assert_eq!(
            en.into_declaration_string(offset),
            "signal EN   : std_logic := '0';"
        );
        assert_eq!(
            data.into_declaration_string(offset),
            "signal data : std_logic_vector(3 downto 0) := (others => '0');"
        );
        assert_eq!(q.into_declaration_string(offset), "signal Q    : std_logic;");
        assert_eq!(q.into_instance_string(offset), "Q    => Q");
    }
}
