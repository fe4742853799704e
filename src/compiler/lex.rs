use std::{rc::Rc, str::Chars};

use crate::{
    common::{
        source::Source,
        span::{Span, Spanned},
    },
    construct::token::{Token, Tokens},
};

/// Names longer than this many characters are rejected.
pub const NAME_CAPACITY: usize = 100;

/// How much of an over-long name is quoted in the error.
const NAME_PREVIEW: usize = 10;

/// Whitespace as the C locale sees it: space, `\t`, `\n`,
/// vertical tab, form feed, and `\r`.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Turns a source into tokens, one at a time.
/// The lexer never fails: malformed input becomes a `Token::Error`,
/// after which lexing carries on from just past the bad input.
#[derive(Debug)]
pub struct Lexer {
    source: Rc<Source>,
    index: usize,
}

impl Lexer {
    pub fn new(source: Rc<Source>) -> Lexer {
        Lexer { source, index: 0 }
    }

    /// Lexes a whole source file into a stream of tokens,
    /// up to and including the first `Token::End`.
    pub fn lex(source: Rc<Source>) -> Tokens {
        let mut lexer = Lexer::new(source);
        let mut tokens = vec![];

        loop {
            let token = lexer.next_token();
            let done = token.item == Token::End;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Returns all characters after the current index
    /// position.
    fn remaining(&self) -> Chars {
        self.source.contents[self.index..].chars()
    }

    /// Selects a range of a string of length `len` from the
    /// current index position.
    fn grab_from_index(&self, len: usize) -> &str {
        &self.source.contents[self.index..self.index + len]
    }

    fn strip(&mut self) {
        let len = self.take_while(is_space);
        self.index += len;
    }

    /// Counts the bytes, starting at the current index,
    /// for which `pred` holds.
    fn take_while(&self, pred: impl Fn(char) -> bool) -> usize {
        self.remaining()
            .take_while(|c| pred(*c))
            .map(char::len_utf8)
            .sum()
    }

    /// Folds a run of decimal digits into a number, left to right.
    fn number(&self) -> (Token, usize) {
        let len = self.take_while(|c| c.is_ascii_digit());
        let number = self
            .grab_from_index(len)
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0.0, |acc, digit| acc * 10.0 + digit as f64);

        (Token::Number(number), len)
    }

    /// Lexes a run of ASCII letters as either a keyword or a name.
    /// An over-long run is consumed in full,
    /// so that exactly one error is produced for it.
    fn name(&self) -> (Token, usize) {
        let len = self.take_while(|c| c.is_ascii_alphabetic());
        let name = self.grab_from_index(len);

        if len > NAME_CAPACITY {
            let error = format!(
                "Name starting with \"{}\" is too long!",
                &name[..NAME_PREVIEW],
            );
            return (Token::Error(error), len);
        }

        let token = Token::keyword(name)
            .unwrap_or_else(|| Token::Name(name.to_string()));
        (token, len)
    }

    /// Lexes the next token, skipping any whitespace before it.
    /// Once the source is exhausted, this returns `Token::End`
    /// every time it is called.
    pub fn next_token(&mut self) -> Spanned<Token> {
        self.strip();

        let next = match self.remaining().next() {
            Some(c) => c,
            None => {
                return Spanned::new(
                    Token::End,
                    Span::point(&self.source, self.index),
                )
            },
        };

        let (token, len) = match next {
            '+' => (Token::Plus, 1),
            '-' => (Token::Minus, 1),
            '*' => (Token::Star, 1),
            '/' => (Token::Slash, 1),
            '(' => (Token::OpenParen, 1),
            ')' => (Token::CloseParen, 1),
            ';' => (Token::Semicolon, 1),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.name(),

            // Unrecognized char
            unknown => (
                Token::Error(format!("Invalid character: '{}'", unknown)),
                unknown.len_utf8(),
            ),
        };

        let spanned =
            Spanned::new(token, Span::new(&self.source, self.index, len));

        self.index += len;
        spanned
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn items(source: &str) -> Vec<Token> {
        Lexer::lex(Source::source(source))
            .into_iter()
            .map(|t| t.item)
            .collect()
    }

    proptest! {
        #[test]
        fn doesnt_crash(s in "\\PC*") {
            let tokens = Lexer::lex(Source::source(&s));
            prop_assert_eq!(&tokens.last().unwrap().item, &Token::End);
        }

        #[test]
        fn integers(n in 0u64..1_000_000_000_000) {
            let tokens = items(&n.to_string());
            prop_assert_eq!(tokens, vec![Token::Number(n as f64), Token::End]);
        }

        #[test]
        fn names(s in "[a-z]{1,100}") {
            let tokens = items(&s);
            let expected = Token::keyword(&s).unwrap_or(Token::Name(s.clone()));
            prop_assert_eq!(tokens, vec![expected, Token::End]);
        }
    }

    #[test]
    fn new_empty() {
        assert_eq!(items(""), vec![Token::End]);
        assert_eq!(items(" \t\n "), vec![Token::End]);
    }

    #[test]
    fn end_repeats() {
        let mut lexer = Lexer::new(Source::source("print"));
        assert_eq!(lexer.next_token().item, Token::Print);
        for _ in 0..5 {
            assert_eq!(lexer.next_token().item, Token::End);
        }
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            items("+-*/();"),
            vec![
                Token::Plus,
                Token::Minus,
                Token::Star,
                Token::Slash,
                Token::OpenParen,
                Token::CloseParen,
                Token::Semicolon,
                Token::End,
            ]
        );
    }

    #[test]
    fn statement() {
        assert_eq!(
            items("laat tau pi * 2 zijn;"),
            vec![
                Token::Laat,
                Token::Name("tau".to_string()),
                Token::Name("pi".to_string()),
                Token::Star,
                Token::Number(2.0),
                Token::Zijn,
                Token::Semicolon,
                Token::End,
            ]
        );
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(items("007"), vec![Token::Number(7.0), Token::End]);
    }

    #[test]
    fn number_then_name() {
        assert_eq!(
            items("2x"),
            vec![Token::Number(2.0), Token::Name("x".to_string()), Token::End]
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            items("laat @ x"),
            vec![
                Token::Laat,
                Token::Error("Invalid character: '@'".to_string()),
                Token::Name("x".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn non_ascii_letter() {
        let tokens = Lexer::lex(Source::source("laat é 1 zijn;"));
        let items: Vec<Token> = tokens.iter().map(|t| t.item.clone()).collect();

        assert_eq!(
            items,
            vec![
                Token::Laat,
                Token::Error("Invalid character: 'é'".to_string()),
                Token::Number(1.0),
                Token::Zijn,
                Token::Semicolon,
                Token::End,
            ]
        );
        assert_eq!(tokens[1].span.contents(), "é");
        assert_eq!(tokens[2].span.offset(), 8);
    }

    #[test]
    fn ascii_whitespace_only() {
        assert_eq!(items("\x0b\x0c\r\n"), vec![Token::End]);
        assert_eq!(
            items("print\u{a0}1"),
            vec![
                Token::Print,
                Token::Error("Invalid character: '\u{a0}'".to_string()),
                Token::Number(1.0),
                Token::End,
            ]
        );
    }

    #[test]
    fn name_at_capacity() {
        let name = "a".repeat(NAME_CAPACITY);
        assert_eq!(items(&name), vec![Token::Name(name.clone()), Token::End]);
    }

    #[test]
    fn name_too_long() {
        let source = format!("{} x", "b".repeat(NAME_CAPACITY + 20));
        let tokens = Lexer::lex(Source::source(&source));

        assert_eq!(
            tokens[0].item,
            Token::Error("Name starting with \"bbbbbbbbbb\" is too long!".to_string())
        );
        assert_eq!(tokens[0].span.len(), NAME_CAPACITY + 20);
        assert_eq!(tokens[1].item, Token::Name("x".to_string()));
        assert_eq!(tokens[2].item, Token::End);
    }

    #[test]
    fn spans() {
        let tokens = Lexer::lex(Source::source("print  12 uit;"));
        let contents: Vec<&str> = tokens.iter().map(|t| t.span.contents()).collect();
        assert_eq!(contents, vec!["print", "12", "uit", ";", ""]);
        assert_eq!(tokens[4].span.offset(), 14);
    }
}
