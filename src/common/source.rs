use std::{
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

/// `Source` is a piece of Laat code:
/// a line typed into the repl, or a file on disk.
/// The path only serves as the source's name in diagnostics;
/// sources built from a plain string point to `./source`.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    pub contents: String,
    pub path: PathBuf,
}

impl Source {
    /// Creates a new `Source` from contents and a path.
    /// The path is not checked against the contents,
    /// use `Source::path` to actually read a file.
    pub fn new(source: &str, path: &Path) -> Rc<Source> {
        Rc::new(Source {
            contents: source.to_string(),
            path: path.to_owned(),
        })
    }

    /// Reads the file at `path` into a new `Source`.
    pub fn path(path: &Path) -> std::io::Result<Rc<Source>> {
        let contents = fs::read_to_string(path)?;
        Ok(Source::new(&contents, path))
    }

    /// Builds a `Source` from just a string.
    pub fn source(source: &str) -> Rc<Source> {
        Source::new(source, &PathBuf::from("./source"))
    }
}
