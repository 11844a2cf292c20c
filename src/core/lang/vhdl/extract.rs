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

//! Scans VHDL source code for the interface of its first entity and the
//! components it declares.

use super::error::ParseError;
use super::interface::{self, Direction, Port};
use super::token::{tokens_to_string, Delimiter, Identifier, Keyword, VhdlToken, VhdlTokenizer};
use serde_derive::Serialize;
use std::fmt::Display;

/// The name of the design unit under test and the name of its testbench.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct EntityDescriptor {
    name: Identifier,
    testbench: Identifier,
}

impl EntityDescriptor {
    pub fn new(name: Identifier) -> Self {
        Self {
            testbench: name.into_extension("_tb"),
            name: name,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn testbench(&self) -> &Identifier {
        &self.testbench
    }
}

/// Port clause text that was not carried over into the results.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    UnmatchedFragment { text: String },
    UnsupportedMode { port: Identifier, mode: Direction },
    ClockNotInput { port: Identifier, mode: Direction },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedFragment { text } => {
                write!(f, "skipped port clause fragment \"{}\"", text)
            }
            Self::UnsupportedMode { port, mode } => write!(
                f,
                "skipped port \"{}\" because mode \"{}\" is not driven by the testbench",
                port, mode
            ),
            Self::ClockNotInput { port, mode } => write!(
                f,
                "skipped port \"{}\" because the clock is generated by the testbench and cannot be of mode \"{}\"",
                port, mode
            ),
        }
    }
}

/// The classified interface of an entity.
#[derive(Debug, PartialEq, Clone)]
pub struct Extraction {
    pub clock: Option<Port>,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
    pub entity: EntityDescriptor,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads the source code for the first entity declaring a port clause and
/// classifies its ports.
///
/// The implicit clock `clk` is never an input; its declaration is kept apart.
/// A `clk` of any other mode is dropped, since the testbench owns that signal.
/// Ports of mode `inout` and `buffer` are left out of both sets. Every dropped
/// port is reported as a diagnostic.
pub fn extract(s: &str) -> Result<Extraction, ParseError> {
    let tokens = into_plain_tokens(s);
    let (name, port_list) = find_port_block(&tokens).ok_or(ParseError::NoPortBlock)?;

    let clock = Identifier::Basic(String::from("clk"));
    let mut clock_port: Option<Port> = None;
    let mut inputs: Vec<Port> = Vec::new();
    let mut outputs: Vec<Port> = Vec::new();
    let mut diagnostics = Vec::new();

    for fragment in split_statements(port_list) {
        let ports = match interface::ports_from_fragment(fragment) {
            Some(p) => p,
            None => {
                diagnostics.push(Diagnostic::UnmatchedFragment {
                    text: tokens_to_string(fragment),
                });
                continue;
            }
        };
        for port in ports {
            if port.name() == &clock && port.direction() != &Direction::In {
                diagnostics.push(Diagnostic::ClockNotInput {
                    port: port.name().clone(),
                    mode: port.direction().clone(),
                });
                continue;
            }
            match port.direction() {
                Direction::In => match port.name() == &clock {
                    true => {
                        if clock_port.is_none() {
                            clock_port = Some(port)
                        }
                    }
                    false => upsert(&mut inputs, port),
                },
                Direction::Out => upsert(&mut outputs, port),
                Direction::Inout | Direction::Buffer => {
                    diagnostics.push(Diagnostic::UnsupportedMode {
                        port: port.name().clone(),
                        mode: port.direction().clone(),
                    })
                }
            }
        }
    }
    Ok(Extraction {
        clock: clock_port,
        inputs: inputs,
        outputs: outputs,
        entity: EntityDescriptor::new(name.clone()),
        diagnostics: diagnostics,
    })
}

/// Collects every `component <name>` declaration in the source code, in file
/// order and keeping duplicates.
///
/// Closing `end component <name>` clauses are not declarations. This differs
/// from a line-based `component <name>` scan, which would list such a
/// component a second time.
pub fn component_names(s: &str) -> Vec<Identifier> {
    let tokens = into_plain_tokens(s);
    let mut names = Vec::new();
    for (i, tkn) in tokens.iter().enumerate() {
        if tkn.check_keyword(&Keyword::Component) == false {
            continue;
        }
        if i > 0 && tokens[i - 1].check_keyword(&Keyword::End) == true {
            continue;
        }
        if let Some(id) = tokens.get(i + 1).and_then(|t| t.as_identifier()) {
            names.push(id.clone());
        }
    }
    names
}

/// Lexes the source code into its tokens without comments or positions.
fn into_plain_tokens(s: &str) -> Vec<VhdlToken> {
    VhdlTokenizer::from_source_code(s)
        .into_tokens()
        .into_iter()
        .map(|t| t.take())
        .collect()
}

/// Finds the first `entity <name> is ... port ( <list> )` block, returning
/// the entity name and the tokens between the port clause's parentheses.
fn find_port_block(tokens: &[VhdlToken]) -> Option<(&Identifier, &[VhdlToken])> {
    let mut i = 0;
    while i + 2 < tokens.len() {
        let header = (
            tokens[i].check_keyword(&Keyword::Entity),
            tokens[i + 1].as_identifier(),
            tokens[i + 2].check_keyword(&Keyword::Is),
        );
        if let (true, Some(name), true) = header {
            if let Some(list) = find_port_clause(&tokens[i + 3..]) {
                return Some((name, list));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}

/// Searches an entity's header for its port clause, stopping at the entity's
/// `end` or `begin`.
fn find_port_clause(tokens: &[VhdlToken]) -> Option<&[VhdlToken]> {
    let mut depth: usize = 0;
    for (i, tkn) in tokens.iter().enumerate() {
        match tkn {
            VhdlToken::Delimiter(Delimiter::ParenL) => depth += 1,
            VhdlToken::Delimiter(Delimiter::ParenR) => depth = depth.saturating_sub(1),
            VhdlToken::Keyword(Keyword::End) | VhdlToken::Keyword(Keyword::Begin)
                if depth == 0 =>
            {
                return None
            }
            VhdlToken::Keyword(Keyword::Port) if depth == 0 => {
                match tokens.get(i + 1) {
                    Some(t) if t.check_delimiter(&Delimiter::ParenL) => (),
                    _ => continue,
                }
                return enclosed(&tokens[i + 2..]);
            }
            _ => (),
        }
    }
    None
}

/// Returns the tokens up to the parenthesis closing an already opened one.
fn enclosed(tokens: &[VhdlToken]) -> Option<&[VhdlToken]> {
    let mut depth: usize = 1;
    for (i, tkn) in tokens.iter().enumerate() {
        if tkn.check_delimiter(&Delimiter::ParenL) {
            depth += 1;
        } else if tkn.check_delimiter(&Delimiter::ParenR) {
            depth -= 1;
            if depth == 0 {
                return Some(&tokens[..i]);
            }
        }
    }
    None
}

/// Splits tokens on terminators outside of parentheses, dropping empty statements.
fn split_statements(tokens: &[VhdlToken]) -> Vec<&[VhdlToken]> {
    let mut statements = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, tkn) in tokens.iter().enumerate() {
        match tkn {
            VhdlToken::Delimiter(Delimiter::ParenL) => depth += 1,
            VhdlToken::Delimiter(Delimiter::ParenR) => depth = depth.saturating_sub(1),
            VhdlToken::Delimiter(Delimiter::Terminator) if depth == 0 => {
                statements.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => (),
        }
    }
    statements.push(&tokens[start..]);
    statements.into_iter().filter(|s| s.is_empty() == false).collect()
}

/// Adds the `port` to the list, or replaces the data type of an earlier port
/// with the same name while keeping its position.
fn upsert(ports: &mut Vec<Port>, port: Port) {
    match ports.iter_mut().find(|p| p.name() == port.name()) {
        Some(existing) => existing.set_datatype(port.datatype().clone()),
        None => ports.push(port),
    }
}
