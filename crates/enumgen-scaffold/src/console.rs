//! Line-based console used by the interactive generator

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prompting and styled output
///
/// The orchestrator only talks to this trait, so runs can be scripted.
pub trait Console {
    /// Ask a question; a blank answer yields `default` when given.
    /// Returns the trimmed answer.
    fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool>;

    fn title(&mut self, text: &str) -> io::Result<()>;

    fn section(&mut self, title: &str) -> io::Result<()>;

    fn text(&mut self, lines: &[String]) -> io::Result<()>;

    fn listing(&mut self, items: &[String]) -> io::Result<()>;

    fn success(&mut self, message: &str) -> io::Result<()>;

    fn warning(&mut self, message: &str) -> io::Result<()>;

    fn error(&mut self, message: &str) -> io::Result<()>;
}

/// `Console` over any reader/writer pair
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn ask(&mut self, question: &str, default: Option<&str>) -> io::Result<String> {
        write!(self.writer, " {} ", question.green())?;
        self.writer.flush()?;

        let answer = self.read_answer()?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        write!(self.writer, " {} ", question.green())?;
        self.writer.flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.to_lowercase().starts_with('y'))
    }

    fn title(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, " {}", text.bold().bright_blue())?;
        writeln!(self.writer, " {}", "=".repeat(text.chars().count()).bright_blue())?;
        writeln!(self.writer)
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, " {}", title.bold().cyan())?;
        writeln!(self.writer, " {}", "-".repeat(title.chars().count()).cyan())?;
        writeln!(self.writer)
    }

    fn text(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.writer, " {}", line)?;
        }
        writeln!(self.writer)
    }

    fn listing(&mut self, items: &[String]) -> io::Result<()> {
        for item in items {
            writeln!(self.writer, " * {}", item)?;
        }
        writeln!(self.writer)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, " {} {}", "[OK]".green().bold(), message)
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, " {} {}", "[WARNING]".yellow().bold(), message)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, " {} {}", "[ERROR]".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_uses_default_for_blank() {
        let mut c = console("\n  Custom  \n");
        assert_eq!(c.ask("Namespace:", Some("App\\Enum")).unwrap(), "App\\Enum");
        assert_eq!(c.ask("Namespace:", Some("App\\Enum")).unwrap(), "Custom");
    }

    #[test]
    fn test_confirm() {
        let mut c = console("yes\nY\nno\n\nmaybe\n");
        assert!(c.confirm("Create?", false).unwrap());
        assert!(c.confirm("Create?", false).unwrap());
        assert!(!c.confirm("Create?", true).unwrap());
        assert!(!c.confirm("Create?", false).unwrap());
        assert!(!c.confirm("Create?", false).unwrap());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut c = console("");
        let err = c.ask("Enum name:", None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_output_is_written() {
        let mut c = console("");
        c.error("Broken").unwrap();
        c.listing(&["one".to_string()]).unwrap();

        let out = String::from_utf8(c.into_writer()).unwrap();
        assert!(out.contains("Broken"));
        assert!(out.contains(" * one"));
    }
}
