//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_aborted, display_advancement, display_boundary_warning, display_error,
    display_status, display_success,
};

/// Prompt shown before a tag is written
pub const CREATE_TAG_PROMPT: &str = "Create this tag?";

/// Prompts user to confirm an action with a yes/no prompt on the terminal.
///
/// Default is "no" if user presses Enter.
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes" (case-insensitive)
/// * `Ok(false)` - Otherwise, including empty input and end of input
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(stdin.lock(), &mut stdout, prompt)
}

/// Same as [confirm_action] over arbitrary streams.
///
/// Input that is not valid UTF-8 is never a yes.
pub fn confirm_with<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    prompt: &str,
) -> Result<bool> {
    write!(writer, "\n{} [y/N] ", prompt)?;
    writer.flush()?;

    let mut input = Vec::new();
    reader.read_until(b'\n', &mut input)?;

    Ok(is_affirmative(&String::from_utf8_lossy(&input)))
}

/// Whether an answer to a y/N prompt means yes. Only the line ending is
/// stripped; any other surrounding whitespace makes it a no.
pub fn is_affirmative(answer: &str) -> bool {
    let response = answer.trim_end_matches(['\r', '\n']).to_lowercase();
    response == "y" || response == "yes"
}
