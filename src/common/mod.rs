//! Contains datastructures shared by the `compiler` and `vm`:
//! the text being run, and spans pointing into it.

pub mod source;
pub mod span;

pub use source::Source;
pub use span::{Span, Spanned};
