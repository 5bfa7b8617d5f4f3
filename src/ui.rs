//! Terminal output for the semverbump binary.

use console::style;

use crate::domain::INITIAL_TAG;

/// Enable or disable styled output for stdout and stderr.
pub fn set_color(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display the proposed version change.
///
/// An empty current tag is shown as the initial release.
pub fn display_proposed_version(current: &str, new_version: &str) {
    println!("{}", format_proposed_version(current, new_version));
}

/// Builds the "From/To" block shown by [`display_proposed_version`].
pub fn format_proposed_version(current: &str, new_version: &str) -> String {
    if current.is_empty() {
        format!(
            "{}\n  From: {} (no previous tag)\n  To:   {}",
            style("Initial Version:").bold(),
            INITIAL_TAG,
            style(new_version).green()
        )
    } else {
        format!(
            "{}\n  From: {}\n  To:   {}",
            style("Proposed Version Change:").bold(),
            style(current).red(),
            style(new_version).green()
        )
    }
}
