use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

pub const CONFIG: &str = "laat.toml";

/// The contents of a `laat.toml`.
/// Every key is optional; missing keys take their default.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub repl: Repl,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Repl {
    pub prompt: String,   // printed before each line
    pub quit: String,     // a line containing just this ends the session
    pub show_ast: bool,   // print the tree of each line before running it
}

impl Default for Repl {
    fn default() -> Repl {
        Repl {
            prompt: "> ".to_string(),
            quit: "q".to_string(),
            show_ast: false,
        }
    }
}

impl Config {
    /// Searches up from `path` for a `laat.toml`.
    /// Returns the default configuration if there is none,
    /// along with the file that was used, if any.
    pub fn find(mut path: &Path) -> Result<(Config, Option<PathBuf>), String> {
        loop {
            let file = path.join(CONFIG);
            if file.is_file() {
                return Ok((Config::load(&file)?, Some(file)));
            }

            path = match path.parent() {
                Some(parent) => parent,
                None => return Ok((Config::default(), None)),
            };
        }
    }

    pub fn load(file: &Path) -> Result<Config, String> {
        let source = fs::read_to_string(file).map_err(|_| {
            format!("The configuration file '{}' could not be read", file.display())
        })?;

        Config::parse(&source).map_err(|e| {
            format!("Could not parse the configuration file '{}': {}", file.display(), e)
        })
    }

    pub fn parse(source: &str) -> Result<Config, String> {
        toml::from_str(source).map_err(|e| e.to_string())
    }
}
