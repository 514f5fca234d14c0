//! Output formatting for the prompt and for diagnostics.
//!
//! The prompt goes to stdout with no trailing newline; errors go to stderr so
//! they never end up embedded in a shell prompt.

use crate::core::config::DEFAULT_FORMAT;
use crate::core::format::{render, Rendered};
use crate::core::status::{Placeholder, StatusRecord};
use crate::core::style::{ATTRIBUTES, PALETTE};
use colored::*;
use std::fmt::Write as _;

/// zsh prompt escape telling the line editor how many columns were printed
pub fn zsh_width_marker(width: usize) -> String {
    format!("%{width}G")
}

/// Final text for the shell, with the zsh width marker appended when asked
pub fn prompt_text(rendered: &Rendered, zsh: bool) -> String {
    if zsh && !rendered.is_empty() {
        format!("{}{}", rendered.text, zsh_width_marker(rendered.width))
    } else {
        rendered.text.clone()
    }
}

/// Formats and prints an error message to stderr
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}

/// Status record used to demonstrate the default format in help output
pub fn example_status() -> StatusRecord {
    StatusRecord {
        branch: "master".to_string(),
        sha: "0455b83f923a40f0b485665c44aa068bc25029f5".to_string(),
        untracked: 1,
        modified: 2,
        staged: 3,
        conflicts: 4,
        ahead: 5,
        behind: 6,
    }
}

/// Long help for the `--format` option
pub fn format_help() -> String {
    let example = render(Some(&example_status()), DEFAULT_FORMAT);
    let mut help = String::with_capacity(1024);

    // Writing to a String cannot fail.
    let _ = writeln!(help, "How to format output\n");
    let _ = writeln!(help, "Default format is: {DEFAULT_FORMAT:?}");
    let _ = writeln!(help, "Example result:    {}\n", example.text);

    let _ = writeln!(help, "Data:");
    for placeholder in Placeholder::ALL {
        let _ = writeln!(
            help,
            "  %{}  {}",
            placeholder.selector(),
            placeholder.description()
        );
    }

    let _ = writeln!(help, "\nColors:");
    for (selector, name, _) in PALETTE {
        let _ = writeln!(help, "  #{selector}  {name}");
    }
    let _ = writeln!(help, "  #_  Reset color");

    let _ = writeln!(help, "\nText attributes:");
    for (set, clear, name, _) in ATTRIBUTES {
        let _ = writeln!(help, "  @{set}  Set {name}");
        let _ = writeln!(help, "  @{clear}  Clear {name}");
    }
    let _ = writeln!(help, "  @_  Clear all attributes");

    let _ = writeln!(help, "\nGroups and escaping:");
    let _ = writeln!(
        help,
        "  [...]  Hidden when every value inside is zero"
    );
    let _ = write!(help, "  \\x     Literal x");

    help
}
