//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Stdout helpers return the write error instead of panicking on a closed pipe.

use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", msg.to_string().cyan().bold())?;
    out.flush()
}

/// Print numbered line (dimmed number, plain text)
pub fn numbered(n: usize, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{} {}", format!("{}:", n).dimmed(), msg)?;
    out.flush()
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", msg)?;
    out.flush()
}
