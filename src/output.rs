//! CLI output formatting.
//!
//! Paths are shown relative to the build root, so a run from the site
//! directory prints `notes/a.md` rather than `./notes/a.md`.
//!
//! ```text
//! No HTML file for notes/a.md
//! about.md out of date (template changed)
//! Found 2 markdown file(s) to process...
//! about.md
//! notes/a.md
//! Wrote about.html
//! Wrote notes/a.html
//! 2 rebuilt, 5 up to date
//! Done.
//! ```
//!
//! Each `format_*` function is pure and returns plain lines; the `print_*`
//! wrappers add color and write to stdout (failures go to stderr).

use crate::pipeline::{BuildEvent, BuildSummary};
use crate::stale::StaleReason;
use colored::{ColoredString, Colorize};
use std::path::Path;

/// `path` relative to `root` when it lives under it, otherwise as given.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Format one progress event as plain lines.
pub fn format_event(event: &BuildEvent, root: &Path) -> Vec<String> {
    match event {
        BuildEvent::PlaceholderMissing {
            template,
            placeholder,
        } => vec![format!(
            "Template {} has no {} placeholder; pages will not include their content",
            template.display(),
            placeholder
        )],
        BuildEvent::Stale { source, reason } => match reason {
            StaleReason::MissingOutput => {
                vec![format!("No HTML file for {}", display_path(source, root))]
            }
            other => vec![format!(
                "{} out of date ({})",
                display_path(source, root),
                other
            )],
        },
        BuildEvent::Queued { sources } => {
            let mut lines = vec![format!(
                "Found {} markdown file(s) to process...",
                sources.len()
            )];
            lines.extend(sources.iter().map(|s| display_path(s, root)));
            lines
        }
        BuildEvent::Written { output } => vec![format!("Wrote {}", display_path(output, root))],
        BuildEvent::Failed { source, message } => {
            vec![format!("Failed {}: {}", display_path(source, root), message)]
        }
    }
}

fn paint(event: &BuildEvent, line: String, first: bool) -> ColoredString {
    match event {
        BuildEvent::PlaceholderMissing { .. } => line.as_str().yellow(),
        BuildEvent::Stale { .. } => line.as_str().magenta(),
        // Only the count line is highlighted; the path list stays plain.
        BuildEvent::Queued { .. } if first => line.as_str().yellow(),
        BuildEvent::Queued { .. } => line.as_str().normal(),
        BuildEvent::Written { .. } => line.as_str().green(),
        BuildEvent::Failed { .. } => line.as_str().red(),
    }
}

pub fn print_event(event: &BuildEvent, root: &Path) {
    for (i, line) in format_event(event, root).into_iter().enumerate() {
        let painted = paint(event, line, i == 0);
        match event {
            BuildEvent::Failed { .. } | BuildEvent::PlaceholderMissing { .. } => {
                eprintln!("{}", painted)
            }
            _ => println!("{}", painted),
        }
    }
}

/// Format the end-of-build summary.
///
/// Failures are always counted explicitly; "Done." alone would hide them.
pub fn format_summary(summary: &BuildSummary) -> Vec<String> {
    let mut counts = format!(
        "{} rebuilt, {} up to date",
        summary.written.len(),
        summary.fresh()
    );
    if !summary.is_clean() {
        counts.push_str(&format!(", {} failed", summary.failures.len()));
    }
    vec![counts, "Done.".to_string()]
}

pub fn print_summary(summary: &BuildSummary) {
    let lines = format_summary(summary);
    for line in lines {
        if summary.is_clean() {
            println!("{}", line);
        } else {
            println!("{}", line.as_str().yellow());
        }
    }
}
