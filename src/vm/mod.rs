//! The back half of the pipeline: walking a parsed program.
//! Runtime errors are reported as a `Trace`.

pub mod env;
pub mod interpreter;
pub mod trace;

pub use env::{Environment, Variable};
pub use interpreter::Interpreter;
pub use trace::Trace;
