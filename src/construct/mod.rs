//! The datatypes passed between pipeline stages:
//! tokens produced by the lexer, and the tree produced by the parser.

pub mod token;
pub mod tree;
