//! Command templates
//!
//! A template is the single-line string form of an invocation. Tokenizing splits
//! strictly on the space character; there is no quoting or escaping.

use crate::runner::Invocation;

/// Split a template on single spaces, preserving order
pub fn tokenize(template: &str) -> Vec<String> {
    template.split(' ').map(str::to_string).collect()
}

/// Render the template string for an invocation
pub fn render(invocation: &Invocation) -> String {
    invocation.tokens().join(" ")
}
