//! Final summary printed after a run.

use std::io::{self, Write};

use colored::Colorize;

use crate::translator::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(summary: &RunSummary) {
    print_to(summary, &mut io::stdout().lock());
}

/// Print the summary to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let mut parts = Vec::new();
    if summary.extracted > 0 {
        parts.push(format!(
            "extracted {} from {}",
            plural(summary.extracted, "catalog"),
            plural(summary.source_files, "source file")
        ));
    }
    if summary.compiled > 0 {
        parts.push(format!("compiled {}", plural(summary.compiled, "catalog")));
    }

    let body = if parts.is_empty() {
        "Nothing to do".to_string()
    } else {
        capitalize(&parts.join(", "))
    };

    let _ = writeln!(
        writer,
        "{} {} ({})",
        SUCCESS_MARK.green(),
        body.bold(),
        summary.languages.join(", ")
    );
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
