//! User-facing output.
//!
//! Everything the program tells the user goes through a [`Reporter`]. The
//! binary uses [`ConsoleReporter`]; tests hand a [`Recorder`] to the walker
//! and the driver and inspect the captured [`Line`]s afterwards.

use crate::size::SizeResult;
use crate::theme::{Color, Theme};

use crossterm::style::{self, Stylize};
use crossterm::tty::IsTty;
use std::io::{self, Write};

/// Sink for the four kinds of output lines.
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
    /// An untagged size line: the formatted size followed by `path`.
    fn size(&mut self, size: SizeResult, path: &str);
}

/// Writes tagged lines to stdout, errors to stderr.
///
/// Tags and sizes are coloured from the [`Theme`] only when the stream is a
/// terminal, so redirected output is plain text.
pub struct ConsoleReporter {
    theme: Theme,
    stdout_tty: bool,
    stderr_tty: bool,
}

impl ConsoleReporter {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            stdout_tty: io::stdout().is_tty(),
            stderr_tty: io::stderr().is_tty(),
        }
    }

    fn paint(text: &str, color: &Color, enabled: bool) -> String {
        match color.to_term_color() {
            Ok(c) if enabled && c != style::Color::Reset => {
                style::style(text).with(c).to_string()
            }
            _ => text.to_string(),
        }
    }

    fn tagged_stdout(&self, tag: &str, color: &Color, message: &str) {
        let tag = Self::paint(tag, color, self.stdout_tty);
        let mut out = io::stdout().lock();
        writeln!(out, "{tag} {message}").ok();
    }
}

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        self.tagged_stdout("[Info]", &self.theme.info, message);
    }

    fn warning(&mut self, message: &str) {
        self.tagged_stdout("[Warning]", &self.theme.warning, message);
    }

    fn error(&mut self, message: &str) {
        let tag = Self::paint("[Error]", &self.theme.error, self.stderr_tty);
        let mut err = io::stderr().lock();
        writeln!(err, "{tag} {message}").ok();
    }

    fn size(&mut self, size: SizeResult, path: &str) {
        let size = Self::paint(&size.to_string(), &self.theme.size, self.stdout_tty);
        let mut out = io::stdout().lock();
        writeln!(out, "{size} {path}").ok();
    }
}

/// One captured output line.
#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    Info(String),
    Warning(String),
    Error(String),
    Size(SizeResult, String),
}

impl Line {
    /// The line as [`ConsoleReporter`] would print it, without colour.
    pub fn render(&self) -> String {
        match self {
            Line::Info(msg) => format!("[Info] {msg}"),
            Line::Warning(msg) => format!("[Warning] {msg}"),
            Line::Error(msg) => format!("[Error] {msg}"),
            Line::Size(size, path) => format!("{size} {path}"),
        }
    }
}

/// Keeps every reported line in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<Line>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Size lines as `(size, path)` pairs, in emission order.
    pub fn sizes(&self) -> Vec<(SizeResult, &str)> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Size(size, path) => Some((*size, path.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for Recorder {
    fn info(&mut self, message: &str) {
        self.lines.push(Line::Info(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.lines.push(Line::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.lines.push(Line::Error(message.to_string()));
    }

    fn size(&mut self, size: SizeResult, path: &str) {
        self.lines.push(Line::Size(size, path.to_string()));
    }
}
