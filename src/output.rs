//! Terminal status output for the swatch CLI.
//!
//! Status lines go to stderr with a right-aligned, coloured verb column so
//! that stdout stays free for completions and piped output.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Status printer. Colour is on only when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "   Rendering 12 swatches (3600x3600)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Errors are printed here only when the command carries on regardless.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a path or value in cyan.
    pub fn cyan(&self, text: &str) -> String {
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Render a status line without printing it.
    fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let line = self.format_line(color, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// Pluralize a count: `plural(1, "swatch", "swatches")` -> "1 swatch".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
