use std::fmt::{self, Display};

use crate::{common::span::Spanned, construct::token::Token};

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, proptest_derive::Arbitrary)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The infix operator a token stands for, if any.
    pub fn from_token(token: &Token) -> Option<BinOp> {
        let op = match token {
            Token::Plus => BinOp::Add,
            Token::Minus => BinOp::Sub,
            Token::Star => BinOp::Mul,
            Token::Slash => BinOp::Div,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Plain `f64` arithmetic.
    /// Dividing by zero yields an infinity or NaN, never an error.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

/// Represents an item in the syntax tree,
/// which is the direct result of parsing.
/// Every node exclusively owns its children,
/// so dropping a program drops the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AST {
    Number(f64),
    Name(String),
    /// The implicit reference to the most recently assigned variable.
    Het,
    Binary(BinOp, Box<Spanned<AST>>, Box<Spanned<AST>>),
    Print(Box<Spanned<AST>>),
    /// Target (a `Name` or `Het`), then value.
    Assign(Box<Spanned<AST>>, Box<Spanned<AST>>),
    Program(Vec<Spanned<AST>>),
}

impl AST {
    /// Shortcut for creating an `AST::Binary` variant.
    pub fn binary(op: BinOp, left: Spanned<AST>, right: Spanned<AST>) -> AST {
        AST::Binary(op, Box::new(left), Box::new(right))
    }

    /// Shortcut for creating an `AST::Print` variant.
    pub fn print(expression: Spanned<AST>) -> AST {
        AST::Print(Box::new(expression))
    }

    /// Shortcut for creating an `AST::Assign` variant.
    pub fn assign(target: Spanned<AST>, expression: Spanned<AST>) -> AST {
        AST::Assign(Box::new(target), Box::new(expression))
    }

    /// Appends a statement to a program.
    /// Every other node has a fixed number of children,
    /// so calling this on them is a bug.
    pub fn add_child(&mut self, child: Spanned<AST>) {
        match self {
            AST::Program(statements) => statements.push(child),
            other => unreachable!("can not add a child to {}", other.symbol()),
        }
    }

    /// The children of this node, in order. Empty for leaves.
    pub fn children(&self) -> Vec<&Spanned<AST>> {
        match self {
            AST::Number(_) | AST::Name(_) | AST::Het => vec![],
            AST::Binary(_, left, right) => vec![&**left, &**right],
            AST::Print(expression) => vec![&**expression],
            AST::Assign(target, expression) => vec![&**target, &**expression],
            AST::Program(statements) => statements.iter().collect(),
        }
    }

    /// The symbol this node is rendered as, without its children.
    pub fn symbol(&self) -> String {
        match self {
            AST::Number(number) => format!("{:.5}", number),
            AST::Name(name) => format!("\"{}\"", name),
            AST::Het => "het".to_string(),
            AST::Binary(op, _, _) => op.symbol().to_string(),
            AST::Print(_) => "print".to_string(),
            AST::Assign(_, _) => "=".to_string(),
            AST::Program(_) => "program".to_string(),
        }
    }
}

impl Display for AST {
    /// Renders a tree as `symbol (child, child, ...)`,
    /// or just `symbol` for a node without children:
    /// ```plain
    /// program (= ("tau", * ("pi", 2.00000)))
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())?;

        let children = self.children();
        if children.is_empty() {
            return Ok(());
        }

        write!(f, " (")?;
        for (index, child) in children.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child.item)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::common::{source::Source, span::Span};

    fn spanned(item: AST) -> Spanned<AST> {
        Spanned::new(item, Span::point(&Source::source(""), 0))
    }

    #[test]
    fn leaves() {
        assert_eq!(AST::Number(2.0).to_string(), "2.00000");
        assert_eq!(AST::Name("pi".to_string()).to_string(), "\"pi\"");
        assert_eq!(AST::Het.to_string(), "het");
        assert_eq!(AST::Program(vec![]).to_string(), "program");
    }

    #[test]
    fn nested() {
        let product = AST::binary(
            BinOp::Mul,
            spanned(AST::Name("pi".to_string())),
            spanned(AST::Number(2.0)),
        );
        let assign = AST::assign(
            spanned(AST::Name("tau".to_string())),
            spanned(product),
        );

        let mut program = AST::Program(vec![]);
        program.add_child(spanned(assign));
        program.add_child(spanned(AST::print(spanned(AST::Het))));

        assert_eq!(
            program.to_string(),
            "program (= (\"tau\", * (\"pi\", 2.00000)), print (het))"
        );
        assert_eq!(program.children().len(), 2);
    }

    #[test]
    #[should_panic]
    fn add_child_to_leaf() {
        AST::Het.add_child(spanned(AST::Het));
    }

    proptest! {
        #[test]
        fn operators_round_trip_through_tokens(op: BinOp) {
            let token = match op {
                BinOp::Add => Token::Plus,
                BinOp::Sub => Token::Minus,
                BinOp::Mul => Token::Star,
                BinOp::Div => Token::Slash,
            };
            prop_assert_eq!(BinOp::from_token(&token), Some(op));
            prop_assert_eq!(token.kind(), op.symbol());
        }

        #[test]
        fn binary_renders_its_operator(op: BinOp, l in 0u32..1000, r in 0u32..1000) {
            let tree = AST::binary(
                op,
                spanned(AST::Number(l as f64)),
                spanned(AST::Number(r as f64)),
            );
            prop_assert_eq!(
                tree.to_string(),
                format!("{} ({:.5}, {:.5})", op.symbol(), l as f64, r as f64)
            );
        }
    }
}
