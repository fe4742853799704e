use std::fmt::{self, Display};

use crate::common::span::Spanned;

pub type Tokens = Vec<Spanned<Token>>;

/// These are the different tokens the lexer will output.
/// `Token`s with data contain that data,
/// e.g. a number will be a `Token::Number(...)`, not just a string.
/// Lexing never fails outright: a malformed piece of input
/// becomes a `Token::Error` carrying the diagnostic,
/// which the parser surfaces as soon as it looks at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Semicolon,
    OpenParen,
    CloseParen,

    // Leafs
    Number(f64),
    Name(String),

    // Keywords
    Laat,
    Het,
    Zijn,
    Print,
    Uit,
    En,

    /// End of source, returned forever once reached.
    End,
    Error(String),
}

impl Token {
    /// Looks up a run of letters in the keyword table.
    pub fn keyword(name: &str) -> Option<Token> {
        let keyword = match name {
            "laat" => Token::Laat,
            "het" => Token::Het,
            "zijn" => Token::Zijn,
            "print" => Token::Print,
            "uit" => Token::Uit,
            "en" => Token::En,
            _ => return None,
        };
        Some(keyword)
    }

    /// The name of this kind of token,
    /// as used in `Want <kind>, got <token>.` messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Semicolon => ";",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Number(_) => "number",
            Token::Name(_) => "name",
            Token::Laat => "laat",
            Token::Het => "het",
            Token::Zijn => "zijn",
            Token::Print => "print",
            Token::Uit => "uit",
            Token::En => "en",
            Token::End => "end",
            Token::Error(_) => "none",
        }
    }

    /// Returns the lexer diagnostic, if this is an error token.
    pub fn error(&self) -> Option<&str> {
        match self {
            Token::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Display for Token {
    /// Tokens are printed in angle brackets:
    /// names are quoted, numbers have five decimals,
    /// everything else is printed as its kind.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(name) => write!(f, "<\"{}\">", name),
            Token::Number(number) => write!(f, "<{:.5}>", number),
            other => write!(f, "<{}>", other.kind()),
        }
    }
}
