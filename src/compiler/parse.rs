use std::{mem, rc::Rc};

use crate::{
    common::{
        source::Source,
        span::{Span, Spanned},
    },
    compiler::{
        lex::Lexer,
        syntax::{Note, Syntax},
    },
    construct::{
        token::Token,
        tree::{BinOp, AST},
    },
};

/// Parses a source into a program, pulling tokens from a lexer
/// with a single token of lookahead.
///
/// There is no error recovery:
/// the first unexpected token aborts the whole parse,
/// dropping whatever part of the tree was already built.
/// Lexer errors sitting in the lookahead always win
/// over the parser's own `Want ..., got ...` message.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    lookahead: Spanned<Token>,
}

impl Parser {
    /// Builds a parser and primes its lookahead.
    pub fn new(source: Rc<Source>) -> Parser {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token();
        Parser { lexer, lookahead }
    }

    /// Parses a program; the whole source must be consumed.
    pub fn parse(&mut self) -> Result<Spanned<AST>, Syntax> {
        let program = self.program()?;
        self.expect(Token::End)?;
        Ok(program)
    }

    /// Moves on to the next token, returning the old lookahead.
    fn advance(&mut self) -> Spanned<Token> {
        mem::replace(&mut self.lookahead, self.lexer.next_token())
    }

    /// Builds the error for a lookahead that doesn't fit the grammar.
    fn unexpected(&self, want: &str) -> Syntax {
        self.unexpected_with_note(want, Note::new(self.lookahead.span.clone()))
    }

    /// Like `unexpected`, but with a custom note on the lookahead.
    /// A lexer error is still reported as-is.
    fn unexpected_with_note(&self, want: &str, note: Note) -> Syntax {
        match self.lookahead.item.error() {
            Some(error) => Syntax::error(error, &self.lookahead.span),
            None => Syntax::error_with_note(
                &format!("Want {}, got {}.", want, self.lookahead.item),
                note,
            ),
        }
    }

    /// Consumes the lookahead if it is `token`,
    /// returning where it was found.
    fn expect(&mut self, token: Token) -> Result<Span, Syntax> {
        if self.lookahead.item == token {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(token.kind()))
        }
    }

    /// `(left, right)` binding powers of an infix operator.
    /// The right binding power is one above the left,
    /// so operators of the same level associate to the left:
    /// `8 - 4 - 2` becomes `(8 - 4) - 2`.
    fn binding_power(op: BinOp) -> (u8, u8) {
        match op {
            BinOp::Add | BinOp::Sub => (1, 2),
            BinOp::Mul | BinOp::Div => (3, 4),
        }
    }

    fn program(&mut self) -> Result<Spanned<AST>, Syntax> {
        let start = self.lookahead.span.clone();
        let mut program = AST::Program(vec![]);

        while self.lookahead.item != Token::End {
            program.add_child(self.statement()?);
        }

        let span = Span::combine(&start, &self.lookahead.span);
        Ok(Spanned::new(program, span))
    }

    fn statement(&mut self) -> Result<Spanned<AST>, Syntax> {
        let statement = match self.lookahead.item {
            Token::Laat => self.assignment()?,
            Token::Print => self.print()?,
            _ => return Err(self.unexpected("assignment or print")),
        };

        if self.lookahead.item != Token::Semicolon {
            let hint = Note::new_with_hint(
                "statements end with `;`",
                &self.lookahead.span,
            );
            return Err(self.unexpected_with_note(";", hint));
        }

        let end = self.advance().span;
        let span = Span::combine(&statement.span, &end);
        Ok(Spanned::new(statement.item, span))
    }

    /// `laat (name | het) expression zijn`
    fn assignment(&mut self) -> Result<Spanned<AST>, Syntax> {
        let start = self.expect(Token::Laat)?;
        let target = self.target()?;
        let expression = self.expression(0)?;
        let end = self.expect(Token::Zijn)?;

        Ok(Spanned::new(
            AST::assign(target, expression),
            Span::combine(&start, &end),
        ))
    }

    /// The variable being assigned to: a name, or `het`.
    fn target(&mut self) -> Result<Spanned<AST>, Syntax> {
        match self.lookahead.item {
            Token::Name(_) | Token::Het => (),
            _ => return Err(self.unexpected("name or het")),
        }

        Ok(self.advance().map(|token| match token {
            Token::Name(name) => AST::Name(name),
            Token::Het => AST::Het,
            other => unreachable!("{} is not an assignment target", other),
        }))
    }

    /// `print expression uit`
    fn print(&mut self) -> Result<Spanned<AST>, Syntax> {
        let start = self.expect(Token::Print)?;
        let expression = self.expression(0)?;
        let end = self.expect(Token::Uit)?;

        Ok(Spanned::new(
            AST::print(expression),
            Span::combine(&start, &end),
        ))
    }

    /// Parses an expression by precedence climbing.
    /// Keeps folding infix operators into `left`
    /// while they bind at least as tightly as `min_bp`.
    fn expression(&mut self, min_bp: u8) -> Result<Spanned<AST>, Syntax> {
        let mut left = self.primary()?;

        loop {
            if let Some(error) = self.lookahead.item.error() {
                return Err(Syntax::error(error, &self.lookahead.span));
            }

            let op = match BinOp::from_token(&self.lookahead.item) {
                Some(op) => op,
                None => break,
            };

            let (left_bp, right_bp) = Parser::binding_power(op);
            if left_bp < min_bp {
                break;
            }

            self.advance();
            let right = self.expression(right_bp)?;
            let span = Span::combine(&left.span, &right.span);
            left = Spanned::new(AST::binary(op, left, right), span);
        }

        Ok(left)
    }

    /// A number, a name, `het`, or a parenthesized expression.
    fn primary(&mut self) -> Result<Spanned<AST>, Syntax> {
        match self.lookahead.item {
            Token::Number(_) | Token::Name(_) | Token::Het => (),
            Token::OpenParen => return self.group(),
            _ => return Err(self.unexpected("number, name, het, or(")),
        }

        Ok(self.advance().map(|token| match token {
            Token::Number(number) => AST::Number(number),
            Token::Name(name) => AST::Name(name),
            Token::Het => AST::Het,
            other => unreachable!("{} is not a primary expression", other),
        }))
    }

    fn group(&mut self) -> Result<Spanned<AST>, Syntax> {
        let start = self.expect(Token::OpenParen)?;
        let expression = self.expression(0)?;

        if self.lookahead.item != Token::CloseParen {
            let error = self.unexpected(")");
            return Err(match self.lookahead.item.error() {
                Some(_) => error,
                None => error.add_note(Note::new_with_hint("unclosed `(`", &start)),
            });
        }

        let end = self.advance().span;

        Ok(Spanned::new(expression.item, Span::combine(&start, &end)))
    }
}
