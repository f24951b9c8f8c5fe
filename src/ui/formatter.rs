//! Pure formatting functions for terminal output.
//!
//! Styling goes through `console`, which drops colors when the stream is not a terminal,
//! so piped output stays byte-exact.

use console::style;

use crate::cli::orchestration::{Stage, WorkflowResult};

/// Tag printed in front of every domain error.
pub const PROGRAM_TAG: &str = "[bump]";

/// Build the `[bump] message` line printed for a domain error.
///
/// The tag is styled for stderr and comes out plain when stderr is not a terminal.
pub fn format_error(message: &str) -> String {
    format!(
        "{} {}",
        style(PROGRAM_TAG).for_stderr().red().bold(),
        message
    )
}

/// Print a domain error to stderr, prefixed with the program tag.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a workflow stage as a status line.
pub fn display_stage(stage: &Stage) {
    display_status(&stage.to_string());
}

/// Describe one processed target, e.g. `pyproject.toml: 1.2.3 -> 1.2.4`.
pub fn describe_update(file: &str, from: &str, to: &str) -> String {
    format!("{}: {} -> {}", file, from, to)
}

/// Summarize a finished run.
///
/// In dry-run mode the lines say what would have been written.
pub fn display_result(result: &WorkflowResult, dry_run: bool) {
    let next = result.next.to_string();
    for update in &result.written {
        let line = describe_update(&update.file, &update.previous.to_string(), &next);
        if dry_run {
            display_status(&format!("Would write {}", line));
        } else {
            display_success(&line);
        }
    }

    if result.written.is_empty() {
        display_status(&format!(
            "No targets configured; {} -> {} not written",
            result.previous, result.next
        ));
    }
}
