pub mod lexer;
pub mod vhdl;
