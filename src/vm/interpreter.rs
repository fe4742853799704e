use std::io::Write;

use crate::{
    common::span::{Span, Spanned},
    construct::tree::AST,
    vm::{
        env::{Environment, Variable},
        trace::Trace,
    },
};

/// Walks parsed programs, printing to `output`.
/// An `Interpreter`'s variables outlive a single program,
/// so one instance can serve a whole repl session.
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    output: W,
    env: Environment,
    error: Option<Trace>,
}

fn het_invalid(span: &Span) -> Trace {
    Trace::error("Name", "\"het\" is invalid here", vec![span.clone()])
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Interpreter<W> {
        Interpreter {
            output,
            env: Environment::new(),
            error: None,
        }
    }

    /// Runs the statements of a program in order.
    /// The first runtime error stops the program and is kept
    /// until the next call; check it with `error`.
    /// Variables assigned before the error stay assigned.
    pub fn interpret(&mut self, program: &Spanned<AST>) {
        self.error = None;

        let statements = match &program.item {
            AST::Program(statements) => statements,
            other => unreachable!("expected a program, found {}", other.symbol()),
        };

        for statement in statements {
            if let Err(trace) = self.statement(statement) {
                self.error = Some(trace);
                return;
            }
        }
    }

    /// The runtime error raised by the last call to `interpret`, if any.
    pub fn error(&self) -> Option<&Trace> {
        self.error.as_ref()
    }

    pub fn variables(&self) -> &[Variable] {
        self.env.variables()
    }

    /// The variable `het` currently refers to.
    pub fn last(&self) -> Option<&Variable> {
        self.env.last()
    }

    /// The sink `print` writes to.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn statement(&mut self, statement: &Spanned<AST>) -> Result<(), Trace> {
        let result = match &statement.item {
            AST::Print(expression) => self.print(expression),
            AST::Assign(target, expression) => self.assign(target, expression),
            other => unreachable!("expected a statement, found {}", other.symbol()),
        };

        result.map_err(|mut trace| {
            trace.add_context(statement.span.clone());
            trace
        })
    }

    fn print(&mut self, expression: &Spanned<AST>) -> Result<(), Trace> {
        let value = self.expression(expression)?;

        writeln!(self.output, "{:.6}", value).map_err(|e| {
            Trace::error(
                "IO",
                &format!("could not write output: {}", e),
                vec![expression.span.clone()],
            )
        })
    }

    /// Resolves the name an assignment writes to.
    fn target(&self, target: &Spanned<AST>) -> Result<String, Trace> {
        match &target.item {
            AST::Name(name) => Ok(name.clone()),
            AST::Het => self
                .env
                .last()
                .map(|variable| variable.name.clone())
                .ok_or_else(|| het_invalid(&target.span)),
            other => unreachable!("expected an assignment target, found {}", other.symbol()),
        }
    }

    fn assign(
        &mut self,
        target: &Spanned<AST>,
        expression: &Spanned<AST>,
    ) -> Result<(), Trace> {
        let name = self.target(target)?;
        let value = self.expression(expression)?;
        self.env.assign(&name, value);
        Ok(())
    }

    fn expression(&self, expression: &Spanned<AST>) -> Result<f64, Trace> {
        match &expression.item {
            AST::Number(number) => Ok(*number),
            AST::Name(name) => self.env.lookup(name).ok_or_else(|| {
                Trace::error(
                    "Name",
                    &format!("variable named \"{}\" doesn't exist", name),
                    vec![expression.span.clone()],
                )
            }),
            AST::Het => self
                .env
                .last()
                .map(|variable| variable.value)
                .ok_or_else(|| het_invalid(&expression.span)),
            AST::Binary(op, left, right) => {
                let left = self.expression(left)?;
                let right = self.expression(right)?;
                Ok(op.apply(left, right))
            },
            other => unreachable!("expected an expression, found {}", other.symbol()),
        }
    }
}
