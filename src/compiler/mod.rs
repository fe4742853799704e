//! This module contains the front half of the pipeline.
//! Each step turns one datatype into another,
//! starting with `Source` (string + path):
//!
//! 1. Tokens: `lex.rs`
//! 2. Syntax tree: `parse.rs`
//!
//! Errors found along the way are reported as a `Syntax`.

use std::rc::Rc;

pub mod lex;
pub use lex::Lexer;

pub mod parse;
pub use parse::Parser;

pub mod syntax;
pub use syntax::Syntax;

use crate::{
    common::{Source, Spanned},
    construct::{token::Tokens, tree::AST},
};

#[inline(always)]
pub fn lex(source: Rc<Source>) -> Tokens {
    Lexer::lex(source)
}

#[inline(always)]
pub fn parse(source: Rc<Source>) -> Result<Spanned<AST>, Syntax> {
    Parser::new(source).parse()
}
