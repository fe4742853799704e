use std::{io, path::PathBuf};

use laat::{compiler, Interpreter, Source};

pub fn run(path: PathBuf) -> Result<(), String> {
    let source = Source::path(&path)
        .map_err(|_| format!("Could not read the source file '{}'", path.display()))?;

    let program = compiler::parse(source).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(stdout.lock());
    interpreter.interpret(&program);

    match interpreter.error() {
        Some(trace) => Err(trace.to_string()),
        None => Ok(()),
    }
}
