pub mod error;
pub mod extract;
pub mod interface;
pub mod token;
