//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout, colored only when stdout is a terminal so piped
//! output stays byte-exact. Errors are rendered by `miette` on stderr.

use std::io::{IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout_stream() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Prints a rendered selector.
pub fn print_selector(rendered: &str) {
    let mut stdout = stdout_stream();
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let _ = writeln!(stdout, "{rendered}");
    let _ = stdout.reset();
}

/// Prints a JSON document or a plain value as-is.
pub fn print_plain(text: &str) {
    let mut stdout = stdout_stream();
    let _ = writeln!(stdout, "{text}");
}
