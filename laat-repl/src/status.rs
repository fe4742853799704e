use colored::*;

pub enum Kind {
    Info,
    Warn,
    Fatal,
}

/// A tagged, coloured message on stderr, e.g.
/// ```plain
///         Info Loaded configuration from ./laat.toml
/// ```
pub struct Status(pub Kind, pub &'static str);

impl Status {
    pub fn info() -> Status {
        Status(Kind::Info, "Info")
    }
    pub fn warn() -> Status {
        Status(Kind::Warn, "Warning")
    }
    pub fn fatal() -> Status {
        Status(Kind::Fatal, "Fatal")
    }

    fn tag(&self) -> ColoredString {
        match self.0 {
            Kind::Info => self.1.blue(),
            Kind::Warn => self.1.yellow(),
            Kind::Fatal => self.1.red(),
        }
        .bold()
    }

    /// Formats a message; messages spanning several lines,
    /// like syntax errors, get a block of their own.
    pub fn format(&self, message: &str) -> String {
        let lines = message.lines().collect::<Vec<&str>>();

        if lines.len() > 1 {
            format!("\n{} \n{}\n", self.tag(), lines.join("\n"))
        } else {
            format!("{:>12} {}", self.tag(), message)
        }
    }

    pub fn log(&self, message: &str) {
        eprintln!("{}", self.format(message));
    }
}
