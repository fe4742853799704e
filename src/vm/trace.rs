use std::fmt;

use crate::common::span::Span;

/// Represents a runtime error, i.e. a traceback
#[derive(Debug, PartialEq, Eq)]
pub struct Trace {
    kind: String,
    message: String,
    spans: Vec<Span>,
}

impl Trace {
    /// Creates a new traceback
    pub fn error(kind: &str, message: &str, spans: Vec<Span>) -> Trace {
        Trace {
            kind: kind.to_string(),
            message: message.to_string(),
            spans,
        }
    }

    /// Used to add context (i.e. the enclosing statement) while unwinding.
    pub fn add_context(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The user-facing message, without any location information.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Traceback, most recent call last:")?;

        for span in self.spans.iter().rev() {
            fmt::Display::fmt(span, f)?;
        }

        write!(f, "Runtime {} Error: {}", self.kind, self.message)
    }
}
