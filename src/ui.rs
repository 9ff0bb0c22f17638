//! Terminal output styling
//!
//! `colored` honours `NO_COLOR` and `CLICOLOR_FORCE`, so nothing here checks the terminal.

use colored::{ColoredString, Colorize};

/// Kinds of status line the launcher prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Run,
    Info,
    Debug,
    Error,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Run => "[RUN]",
            Tag::Info => "[INFO]",
            Tag::Debug => "[DEBUG]",
            Tag::Error => "[ERROR]",
        }
    }

    /// The styled prefix for this tag
    pub fn prefix(self) -> ColoredString {
        let label = self.label();
        match self {
            Tag::Run => label.green().bold(),
            Tag::Info => label.cyan(),
            Tag::Debug => label.dimmed(),
            Tag::Error => label.red().bold(),
        }
    }
}

/// A status line with a styled prefix
pub fn status_line(tag: Tag, message: &str) -> String {
    format!("{} {}", tag.prefix(), message)
}

/// Highlight a preset name for listings
pub fn preset_name(name: &str) -> ColoredString {
    name.bold()
}
