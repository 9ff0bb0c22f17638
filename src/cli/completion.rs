//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Write a completion script for `shell` to stdout
pub fn print_completions(shell: Shell, command: &mut Command) {
    write_completions(shell, command, &mut io::stdout());
}

/// Write a completion script for `shell` to `out`
pub fn write_completions(shell: Shell, command: &mut Command, out: &mut dyn Write) {
    let bin_name = command.get_name().to_string();
    generate(shell, command, bin_name, out);
}
