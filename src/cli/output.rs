//! Terminal output formatting
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Render a result as a floating-point literal (`5.0`, not `5`).
pub fn render_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Print a result to stdout.
pub fn result(value: f64) {
    println!("{}", render_number(value));
}

/// Print error (red "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", format!("Error: {}", msg).red());
}
