//! # Laat
//! This repository contains the core of Laat, a tiny imperative
//! language with Dutch keywords, including the lexer, parser,
//! and a tree-walking interpreter.
//! If you're looking for the REPL, see the `laat-repl` crate.
//!
//! ## A taste of the language
//! ```plain
//! laat x 5 zijn;
//! laat het het + 1 zijn;
//! print het * 2 uit;
//! ```
//! `laat ... zijn` assigns, `print ... uit` prints,
//! and `het` refers to whichever variable was assigned last.
//!
//! ## Embedding Laat in Rust
//! ```
//! use laat::{compiler, vm::Interpreter, Source};
//!
//! let program = compiler::parse(Source::source("print 2 + 2 * 2 uit;")).unwrap();
//! let mut output = vec![];
//! let mut interpreter = Interpreter::new(&mut output);
//! interpreter.interpret(&program);
//! assert!(interpreter.error().is_none());
//! drop(interpreter);
//! assert_eq!(String::from_utf8(output).unwrap(), "6.000000\n");
//! ```
//!
//! ## Overview of the pipeline
//! Source code is represented as a `Source` object,
//! which is lexed into `Token`s, parsed into an `AST`,
//! and finally walked by the `Interpreter`.
//! Each step produces spanned values so errors can point
//! back at the text that caused them.

pub mod common;
pub mod compiler;
pub mod construct;
pub mod vm;

pub use common::{Source, Span, Spanned};
pub use compiler::{Lexer, Parser, Syntax};
pub use construct::{token::Token, tree::AST};
pub use vm::{Interpreter, Trace};
