//! User-facing status lines, one method per severity.

use std::cell::RefCell;

use colored::Colorize;

/// Category of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
    Title,
    Detail,
}

/// Emits categorized status messages.
///
/// Implementations decide how each level is styled; callers only pick the level.
pub trait Reporter {
    fn emit(&self, level: Level, text: &str);

    fn success(&self, text: &str) {
        self.emit(Level::Success, text);
    }

    fn info(&self, text: &str) {
        self.emit(Level::Info, text);
    }

    fn warning(&self, text: &str) {
        self.emit(Level::Warning, text);
    }

    fn error(&self, text: &str) {
        self.emit(Level::Error, text);
    }

    fn title(&self, text: &str) {
        self.emit(Level::Title, text);
    }

    fn detail(&self, text: &str) {
        self.emit(Level::Detail, text);
    }
}

/// Colored terminal output. Errors go to stderr, everything else to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, level: Level, text: &str) {
        match level {
            Level::Success => println!("{}", text.green().bold()),
            Level::Info => println!("{}", text.blue()),
            Level::Warning => println!("{}", text.yellow()),
            Level::Error => eprintln!("{} {}", "✖".red(), text),
            Level::Title => println!("\n{}", text.magenta().bold()),
            Level::Detail => println!("  {}", text.cyan()),
        }
    }
}

/// Keeps every line in memory instead of printing it.
#[derive(Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Texts recorded at one level, in order.
    pub fn texts(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(_, text)| text.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn emit(&self, level: Level, text: &str) {
        self.lines.borrow_mut().push((level, text.to_string()));
    }
}
