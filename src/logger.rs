use colored::*;
use console::{Term, measure_text_width};
use std::fmt::Display;

use crate::panel;

/// Console output helpers with the wharf brand palette.
/// Never instantiated; it's just a namespace for printing functions.
/// Amber (240, 178, 50) for anything worth noticing, grey for the rest.
pub struct Logger;

impl Logger {
    /// Prints the startup banner: the same bordered panel `about` uses,
    /// filled with our own metadata and centered on the terminal.
    pub fn banner() {
        let term = Term::stdout();
        let cols = term.size().1 as usize;

        let card = panel::render(
            "wharf",
            concat!("v", env!("CARGO_PKG_VERSION")),
            "by The Wharf Project",
            "A CLI app store for Windows",
        );

        println!();
        for line in card.lines() {
            // measure_text_width ignores the ANSI codes, so rows with
            // different color runs still center to the same column.
            let pad = cols.saturating_sub(measure_text_width(line)) / 2;
            println!("{}{}", " ".repeat(pad), line);
        }
        println!();
    }

    /// General information that doesn't fit the other categories.
    pub fn info<T: Display>(msg: T) {
        println!("{} {}", "•".truecolor(240, 178, 50).bold(), msg);
    }

    pub fn success<T: Display>(msg: T) {
        println!("{} {}", "✔".green().bold(), msg);
    }

    pub fn error<T: Display>(msg: T) {
        println!("{} {}", "✖".red().bold(), msg);
    }

    /// A step label: "command description" with the command in brand amber
    /// and the description dimmed.
    pub fn command<T: Display>(cmd: &str, msg: T) {
        println!(
            "{} {}",
            cmd.truecolor(240, 178, 50).bold(),
            msg.to_string().dimmed()
        );
    }

    /// Returns a string in brand amber for inline use in formatted messages.
    pub fn highlight<T: Display>(msg: T) -> String {
        msg.to_string().truecolor(240, 178, 50).bold().to_string()
    }
}
