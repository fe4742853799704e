use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

use crate::common::source::Source;

/// A `Span` refers to a section of a source,
/// much like a `&str`, but with a reference to a `Source` rather than a `String`.
/// Spans are attached to tokens, trees, and errors,
/// so that errors can point back at the text that caused them.
#[derive(Clone, Eq, PartialEq)]
pub struct Span {
    source: Rc<Source>,
    offset: usize,
    length: usize,
}

impl Span {
    /// Create a new `Span` from a byte offset with a byte length.
    pub fn new(source: &Rc<Source>, offset: usize, length: usize) -> Span {
        Span {
            source: Rc::clone(source),
            offset,
            length,
        }
    }

    /// A zero-length `Span` pointing at a specific offset.
    pub fn point(source: &Rc<Source>, offset: usize) -> Span {
        Span::new(source, offset, 0)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Return the index of the end of the `Span`.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Creates a new `Span` covering both `a` and `b`,
    /// and anything in between.
    /// ```plain
    /// laat x 2 + 3 zijn
    ///        ^           | Span a
    ///            ^       | Span b
    ///        ^^^^^       | combined
    /// ```
    pub fn combine(a: &Span, b: &Span) -> Span {
        if a.source != b.source {
            panic!("Can't combine two Spans with separate sources");
        }

        let offset = a.offset.min(b.offset);
        let end = a.end().max(b.end());
        Span::new(&a.source, offset, end - offset)
    }

    /// Returns the text a `Span` covers.
    pub fn contents(&self) -> &str {
        &self.source.contents[self.offset..self.end()]
    }

    /// The zero-based line the byte at `index` sits on.
    fn line(&self, index: usize) -> usize {
        self.source.contents[..index].matches('\n').count()
    }

    /// The zero-based column, in characters, of the byte at `index`.
    fn col(&self, index: usize) -> usize {
        let before = &self.source.contents[..index];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        before[line_start..].chars().count()
    }

    pub fn format(&self) -> FormattedSpan {
        let start = self.line(self.offset);
        let end = self.line(self.end());
        let lines = self
            .source
            .contents
            .split('\n')
            .skip(start)
            .take(end - start + 1)
            .map(|l| l.to_string())
            .collect();

        FormattedSpan {
            path: self.source.path.to_string_lossy().to_string(),
            start,
            lines,
            start_col: self.col(self.offset),
            end_col: self.col(self.end()),
        }
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("contents", &self.contents())
            .field("start", &self.offset)
            .field("end", &self.end())
            .finish()
    }
}

impl Display for Span {
    /// Prints where the `Span` occurs in its source:
    /// ```plain
    /// In ./source:1:8
    ///   |
    /// 1 | laat x @ zijn;
    ///   |        ^
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// A span resolved into lines and columns, ready to be displayed.
pub struct FormattedSpan {
    pub path: String,
    /// Zero-based line the span starts on.
    pub start: usize,
    pub lines: Vec<String>,
    pub start_col: usize,
    pub end_col: usize,
}

impl FormattedSpan {
    pub fn is_multiline(&self) -> bool {
        self.lines.len() != 1
    }

    /// Width of the widest line number in the gutter.
    pub fn gutter_padding(&self) -> usize {
        (self.start + self.lines.len()).to_string().len()
    }

    /// If a single line span, returns the number of carets to draw.
    pub fn carets(&self) -> Option<usize> {
        if self.is_multiline() {
            None
        } else {
            Some(self.end_col.saturating_sub(self.start_col).max(1))
        }
    }

    /// Writes the snippet, optionally ending the caret line with a hint.
    pub fn write_with_hint(
        &self,
        f: &mut Formatter<'_>,
        hint: Option<&str>,
    ) -> fmt::Result {
        let gutter = " ".repeat(self.gutter_padding());
        writeln!(
            f,
            "In {}:{}:{}",
            self.path,
            self.start + 1,
            self.start_col + 1
        )?;
        writeln!(f, "{} |", gutter)?;

        match self.carets() {
            Some(carets) => {
                writeln!(
                    f,
                    "{:>width$} | {}",
                    self.start + 1,
                    self.lines[0],
                    width = self.gutter_padding(),
                )?;
                write!(
                    f,
                    "{} | {}{}",
                    gutter,
                    " ".repeat(self.start_col),
                    "^".repeat(carets),
                )?;
                match hint {
                    Some(hint) => writeln!(f, " note: {}", hint)?,
                    None => writeln!(f)?,
                }
            },
            None => {
                for (index, line) in self.lines.iter().enumerate() {
                    writeln!(
                        f,
                        "{:>width$} > {}",
                        self.start + index + 1,
                        line,
                        width = self.gutter_padding(),
                    )?;
                }
                if let Some(hint) = hint {
                    writeln!(f, "{} |- note: {}", gutter, hint)?;
                }
            },
        }

        Ok(())
    }
}

impl Display for FormattedSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_with_hint(f, None)
    }
}

/// A wrapper for spanning types.
/// For example, a `Token` is spanned to indicate
/// where it was lexed from (a `Spanned<Token>`).
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub item: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Takes a generic item, and wraps in in a `Span` to make it `Spanned`.
    pub fn new(item: T, span: Span) -> Spanned<T> {
        Spanned { item, span }
    }

    /// Applies a function to a `Spanned`'s item, keeping the span.
    pub fn map<B>(self, f: impl FnOnce(T) -> B) -> Spanned<B> {
        Spanned::new(f(self.item), self.span)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn combination() {
        let source = Source::source("laat x 2 + 3 zijn");
        let a = Span::new(&source, 7, 1);
        let b = Span::new(&source, 11, 1);

        assert_eq!(Span::combine(&a, &b), Span::new(&source, 7, 5));
        assert_eq!(Span::combine(&b, &a).contents(), "2 + 3");
    }

    #[test]
    fn single_line() {
        let source = Source::source("laat x @ zijn;");
        let span = Span::new(&source, 7, 1);

        let target = "\
In ./source:1:8
  |
1 | laat x @ zijn;
  |        ^
";
        assert_eq!(format!("{}", span), target);
    }

    #[test]
    fn second_line() {
        let source = Source::source("print 1 uit;\nprint y uit;");
        let span = Span::new(&source, 19, 1);
        let formatted = span.format();

        assert_eq!(formatted.start, 1);
        assert_eq!(formatted.start_col, 6);
        assert_eq!(formatted.lines, vec!["print y uit;".to_string()]);
    }

    #[test]
    fn multi_line() {
        let source = Source::source("laat x\n2 zijn;");
        let span = Span::new(&source, 0, 13);
        let formatted = span.format();

        assert!(formatted.is_multiline());
        assert_eq!(formatted.carets(), None);
        assert_eq!(
            format!("{}", formatted),
            "In ./source:1:1\n  |\n1 > laat x\n2 > 2 zijn;\n"
        );
    }

    #[test]
    fn empty() {
        let source = Source::source("");
        let span = Span::point(&source, 0);
        assert_eq!(span.format().carets(), Some(1));
        assert_eq!(span.to_string(), "In ./source:1:1\n  |\n1 | \n  | ^\n");
    }
}
