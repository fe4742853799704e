use structopt::StructOpt;

// argument parser and configuation
pub mod cli;
pub mod config;
pub mod status;

// command implementations
pub mod ast;
pub mod repl;
pub mod run;

use crate::{
    cli::{Command, Laat},
    status::Status,
};

fn main() {
    let laat = Laat::from_args();

    let result = match laat.command.unwrap_or_default() {
        Command::Repl(session) => repl::repl(session.config),
        Command::Run(file) => run::run(file.path),
        Command::Ast(file) => ast::ast(file.path),
    };

    if let Err(r) = result {
        Status::fatal().log(&r);
        std::process::exit(1);
    }
}
