use std::{
    env::current_dir,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    rc::Rc,
};

use laat::{compiler, Interpreter, Source};

use crate::{
    config::{Config, Repl},
    status::Status,
};

const HELP: &str = "\
laat <name | het> <expression> zijn;   assign a variable
print <expression> uit;                print a value
:vars                                  list variables, oldest first
:ast <code>                            show the syntax tree of some code
:tokens <code>                         show the tokens of some code
:help                                  show this message";

/// What to do after a line has been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// One interactive session.
/// Every line is parsed and run against the same interpreter,
/// so variables carry over from line to line.
pub struct Session<W: Write> {
    config: Repl,
    interpreter: Interpreter<W>,
}

impl<W: Write> Session<W> {
    pub fn new(config: Repl, output: W) -> Session<W> {
        Session {
            config,
            interpreter: Interpreter::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.interpreter.into_output()
    }

    fn source(line: &str) -> Rc<Source> {
        Source::new(line, Path::new("<repl>"))
    }

    /// Reads and evaluates lines until the quit word or end of input.
    pub fn run(&mut self, mut input: impl BufRead) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(self.interpreter.output_mut(), "{}", self.config.prompt)?;
            self.interpreter.output_mut().flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => return writeln!(self.interpreter.output_mut()),
                Ok(_) => (),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    Status::warn().log("Skipped a line that is not valid UTF-8");
                    continue;
                },
                Err(e) => return Err(e),
            }

            if self.eval(&line)? == Step::Quit {
                return Ok(());
            }
        }
    }

    /// Handles a single line: a command, the quit word, or code.
    /// Syntax and runtime errors are printed, not returned;
    /// only failing to write is an error.
    pub fn eval(&mut self, line: &str) -> io::Result<Step> {
        let line = line.trim();

        if line == self.config.quit {
            return Ok(Step::Quit);
        }

        if let Some(command) = line.strip_prefix(':') {
            self.command(command)?;
            return Ok(Step::Continue);
        }

        let program = match compiler::parse(Session::<W>::source(line)) {
            Ok(program) => program,
            Err(syntax) => {
                writeln!(self.interpreter.output_mut(), "{}", syntax)?;
                return Ok(Step::Continue);
            },
        };

        if self.config.show_ast {
            writeln!(self.interpreter.output_mut(), "{}", program.item)?;
        }

        self.interpreter.interpret(&program);

        if let Some(trace) = self.interpreter.error().map(|t| t.to_string()) {
            writeln!(self.interpreter.output_mut(), "{}", trace)?;
        }

        Ok(Step::Continue)
    }

    fn command(&mut self, command: &str) -> io::Result<()> {
        let (name, code) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));

        let message = match name {
            "vars" => self.vars(),
            "ast" => match compiler::parse(Session::<W>::source(code)) {
                Ok(program) => program.item.to_string(),
                Err(syntax) => syntax.to_string(),
            },
            "tokens" => compiler::lex(Session::<W>::source(code))
                .iter()
                .map(|token| match token.item.error() {
                    Some(error) => format!("<error: {}>", error),
                    None => token.item.to_string(),
                })
                .collect::<Vec<String>>()
                .join(" "),
            "help" => HELP.to_string(),
            unknown => format!("Unknown command `:{}`, try `:help`", unknown),
        };

        writeln!(self.interpreter.output_mut(), "{}", message)
    }

    /// Lists every variable entry, marking the one `het` refers to.
    fn vars(&self) -> String {
        let last = self.interpreter.last();

        let lines = self
            .interpreter
            .variables()
            .iter()
            .map(|variable| {
                let het = match last {
                    Some(last) if std::ptr::eq(last, variable) => " (het)",
                    _ => "",
                };
                format!("{} = {:.6}{}", variable.name, variable.value, het)
            })
            .collect::<Vec<String>>();

        if lines.is_empty() {
            "No variables yet".to_string()
        } else {
            lines.join("\n")
        }
    }
}

pub fn repl(config: Option<PathBuf>) -> Result<(), String> {
    let config = match config {
        Some(file) => {
            let config = Config::load(&file)?;
            Status::info().log(&format!("Loaded configuration from {}", file.display()));
            config
        },
        None => {
            let dir = current_dir().map_err(|_| "Can not determine the working directory")?;
            let (config, file) = Config::find(&dir)?;
            if let Some(file) = file {
                Status::info().log(&format!("Loaded configuration from {}", file.display()));
            }
            config
        },
    };

    Status::info().log(&format!(
        "Type `:help` for help, `{}` to quit",
        config.repl.quit
    ));

    let stdin = io::stdin();
    let mut session = Session::new(config.repl, io::stdout());
    session
        .run(stdin.lock())
        .map_err(|e| format!("Could not talk to the terminal: {}", e))
}

#[cfg(test)]
mod test {
    use super::*;

    fn quiet() -> Repl {
        Repl {
            prompt: String::new(),
            ..Repl::default()
        }
    }

    fn session(config: Repl, input: &str) -> String {
        let mut session = Session::new(config, Vec::<u8>::new());
        session.run(input.as_bytes()).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn variables_carry_over() {
        let output = session(quiet(), "laat x 5 zijn;\nlaat het het + 1 zijn;\nprint x uit;\n");
        assert_eq!(output, "6.000000\n\n");
    }

    #[test]
    fn quit_stops_reading() {
        let output = session(quiet(), "print 1 uit;\nq\nprint 2 uit;\n");
        assert_eq!(output, "1.000000\n");
    }

    #[test]
    fn custom_quit_and_prompt() {
        let config = Repl {
            prompt: "$ ".to_string(),
            quit: "stop".to_string(),
            show_ast: false,
        };
        let output = session(config, "print 1 uit;\nstop\n");
        assert_eq!(output, "$ 1.000000\n$ ");
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let output = session(quiet(), "print 2 + 2 uit\nprint y uit;\nprint 3 uit;\n");
        assert!(output.contains("Syntax Error: Want ;, got <end>."));
        assert!(output.contains("Runtime Name Error: variable named \"y\" doesn't exist"));
        assert!(output.ends_with("3.000000\n\n"));
    }

    #[test]
    fn vars() {
        let output = session(quiet(), ":vars\nlaat x 1 zijn; laat y 2 zijn; laat x 3 zijn;\n:vars\n");
        assert_eq!(
            output,
            "No variables yet\nx = 3.000000\ny = 2.000000\nx = 3.000000 (het)\n\n"
        );
    }

    #[test]
    fn ast_and_tokens() {
        let output = session(quiet(), ":ast print 2 + 2 * 2 uit;\n:tokens laat x @ zijn;\n");
        assert_eq!(
            output,
            "program (print (+ (2.00000, * (2.00000, 2.00000))))\n\
             <laat> <\"x\"> <error: Invalid character: '@'> <zijn> <;> <end>\n\n"
        );
    }

    #[test]
    fn show_ast() {
        let config = Repl {
            show_ast: true,
            ..quiet()
        };
        let output = session(config, "print pi uit;\n");
        assert!(output.starts_with("program (print (\"pi\"))\n"));
    }

    #[test]
    fn unknown_command() {
        let output = session(quiet(), ":frobnicate\n");
        assert_eq!(output, "Unknown command `:frobnicate`, try `:help`\n\n");
    }
}
