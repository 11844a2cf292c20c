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

use std::path::PathBuf;
use thiserror::Error;

/// Lexical errors raised while tokenizing VHDL source code.
#[derive(Debug, Error, PartialEq)]
pub enum VhdlError {
    #[error("{0}")]
    Any(String),
    #[error("invalid character {0}")]
    Invalid(String),
}

/// Structural errors raised while scanning a design unit for its interface.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no entity with a port clause was found")]
    NoPortBlock,
    #[error("no entity with a port clause was found in {0:?}")]
    NoPortBlockInFile(PathBuf),
}
