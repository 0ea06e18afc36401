//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Colours come from `console`, which drops them when the stream is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Advancement;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Tell the user nothing was changed after declining.
pub fn display_aborted() {
    println!("Aborted.");
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the current version and the one that will be tagged.
pub fn display_advancement(advancement: &Advancement) {
    println!("{}", format_advancement(advancement));
}

/// The two lines printed by [display_advancement], without styling.
pub fn format_advancement(advancement: &Advancement) -> String {
    format!(
        "Current version: {}\nNew version:     {} ({})",
        advancement.current, advancement.next, advancement.part
    )
}
