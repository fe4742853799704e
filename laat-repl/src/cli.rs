use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
pub struct File {
    /// Path to a Laat source file
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
}

#[derive(StructOpt, Debug, Default)]
pub struct Session {
    /// Configuration file to use instead of the nearest `laat.toml`
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Starts an interactive session (the default)
    Repl(Session),
    /// Runs a source file
    Run(File),
    /// Prints the syntax tree of a source file
    Ast(File),
}

impl Default for Command {
    fn default() -> Command {
        Command::Repl(Session::default())
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "Laat", bin_name = "laat", about)]
pub struct Laat {
    #[structopt(subcommand)]
    pub command: Option<Command>,
}
