use std::fmt;

use crate::common::span::Span;

/// Represents a note attached to a Syntax error,
/// i.e. a location in source code with an optional
/// specific hint or tip corresponding to this location.
#[derive(Debug, PartialEq, Eq)]
pub struct Note {
    pub span: Span,
    pub hint: Option<String>,
}

impl Note {
    pub fn new(span: Span) -> Note {
        Note { span, hint: None }
    }

    pub fn new_with_hint(hint: &str, span: &Span) -> Note {
        Note {
            span: span.clone(),
            hint: Some(hint.to_string()),
        }
    }
}

/// Represents a static error found while lexing or parsing.
/// The `reason` is the user-facing message, e.g.
/// `Want zijn, got <;>.`; the notes say where it happened.
#[derive(Debug, PartialEq, Eq)]
pub struct Syntax {
    pub reason: String,
    pub notes: Vec<Note>,
}

impl Syntax {
    /// Creates a new static error with a single note that does not have a hint.
    pub fn error(reason: &str, span: &Span) -> Syntax {
        Syntax::error_with_note(reason, Note::new(span.clone()))
    }

    /// Creates a new static error with a single note that may or may not have a
    /// hint.
    pub fn error_with_note(reason: &str, note: Note) -> Syntax {
        Syntax {
            reason: reason.to_string(),
            notes: vec![note],
        }
    }

    /// Extend a syntax error by adding another note to the error.
    pub fn add_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in self.notes.iter() {
            note.span.format().write_with_hint(f, note.hint.as_deref())?;
        }
        write!(f, "Syntax Error: {}", self.reason)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::source::Source;

    #[test]
    fn error() {
        let source = Source::source("laat x 2 + laat zijn;");
        let error = Syntax::error(
            "Want number, name, het, or(, got <laat>.",
            &Span::new(&source, 11, 4),
        );

        let target = r#"In ./source:1:12
  |
1 | laat x 2 + laat zijn;
  |            ^^^^
Syntax Error: Want number, name, het, or(, got <laat>."#;

        assert_eq!(format!("{}", error), target);
    }

    #[test]
    fn hint() {
        let source = Source::source("print 2 uit");
        let error = Syntax::error_with_note(
            "Want ;, got <end>.",
            Note::new_with_hint("statements end with `;`", &Span::point(&source, 11)),
        );

        let target = r#"In ./source:1:12
  |
1 | print 2 uit
  |            ^ note: statements end with `;`
Syntax Error: Want ;, got <end>."#;

        assert_eq!(format!("{}", error), target);
    }

    #[test]
    fn multi_line_hint() {
        let source = Source::source("print (1\n+ 2 uit;");
        let error = Syntax::error("Want ), got <uit>.", &Span::new(&source, 13, 3))
            .add_note(Note::new_with_hint("unclosed `(`", &Span::new(&source, 6, 6)));

        let target = r#"In ./source:2:5
  |
2 | + 2 uit;
  |     ^^^
In ./source:1:7
  |
1 > print (1
2 > + 2 uit;
  |- note: unclosed `(`
Syntax Error: Want ), got <uit>."#;

        assert_eq!(format!("{}", error), target);
    }
}
