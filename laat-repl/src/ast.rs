use std::path::PathBuf;

use laat::{compiler, Source};

/// Prints the syntax tree of a file without running it.
pub fn ast(path: PathBuf) -> Result<(), String> {
    let source = Source::path(&path)
        .map_err(|_| format!("Could not read the source file '{}'", path.display()))?;

    let program = compiler::parse(source).map_err(|e| e.to_string())?;
    println!("{}", program.item);

    Ok(())
}
