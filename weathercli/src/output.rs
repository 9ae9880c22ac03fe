//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::{Color, Colorize};
use weathercli_core::{LineColor, Report};

fn terminal_color(color: LineColor) -> Color {
    match color {
        LineColor::Red => Color::Red,
        LineColor::Yellow => Color::Yellow,
        LineColor::Magenta => Color::Magenta,
        LineColor::Cyan => Color::Cyan,
        LineColor::BrightRed => Color::BrightRed,
        LineColor::BrightYellow => Color::BrightYellow,
        LineColor::BrightMagenta => Color::BrightMagenta,
        LineColor::BrightCyan => Color::BrightCyan,
        LineColor::BrightGreen => Color::BrightGreen,
        LineColor::BrightBlue => Color::BrightBlue,
    }
}

/// Print each report line in its own color
pub fn report(report: &Report) {
    for line in report.lines() {
        println!("{}", line.text.as_str().color(terminal_color(line.color)));
    }
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
