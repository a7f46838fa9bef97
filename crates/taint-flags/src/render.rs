//! Terminal rendering for reports, listings, and warnings.
//!
//! All functions return plain `String`s; ANSI emphasis comes from the
//! `colored` crate and collapses to plain text when color output is
//! disabled, so the layout can be asserted in tests without a terminal.

use colored::{ColoredString, Colorize};

use crate::flag::TaintLevel;
use crate::parse::QueryWarning;
use crate::report::Report;
use crate::status::StatusError;
use crate::table::ListEntry;

fn emphasize(text: &str, level: TaintLevel) -> ColoredString {
    match level {
        TaintLevel::Info => text.green(),
        TaintLevel::Warn => text.yellow().bold(),
        TaintLevel::Alert => text.red().bold(),
    }
}

/// Render a decoded report: compact symbol row, numeric representation
/// (decimal and fixed-width hex), then one detail line per reported
/// flag, with a closing notice when nothing is tainted.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&"Taint flags:            ".bold().to_string());
    for symbol in &report.symbols {
        match symbol.emphasis {
            Some(level) => out.push_str(&emphasize(&symbol.ch.to_string(), level).to_string()),
            None => out.push(symbol.ch),
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "{}{} / 0x{}\n\n",
        "Numeric representation: ".bold(),
        report.status,
        report.hex()
    ));

    for detail in &report.details {
        let ch = emphasize(&detail.ch.to_string(), detail.emphasis);
        if detail.set {
            out.push_str(&format!("- {ch} {} ({})\n", detail.description, detail.value));
        } else {
            out.push_str(&format!("- {ch} {} ({} unset)\n", detail.description, detail.value));
        }
    }
    if report.is_clean() {
        out.push_str("(Kernel is not tainted)\n");
    }
    out.push('\n');

    out
}

/// Render the full-table listing, one `- X: description (value)` line
/// per entry.
pub fn render_list(entries: &[ListEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        if entry.unset {
            out.push_str(&format!(
                "- {}: {} ({} unset)\n",
                entry.ch, entry.description, entry.value
            ));
        } else {
            out.push_str(&format!("- {}: {} ({})\n", entry.ch, entry.description, entry.value));
        }
    }
    out
}

/// Render a query warning for the diagnostic stream, one emphasized
/// line per warning line.
pub fn render_warning(warning: &QueryWarning) -> String {
    warning
        .to_string()
        .lines()
        .map(|line| format!("{}\n", line.yellow().bold()))
        .collect()
}

/// Render a status-source error for the diagnostic stream.
pub fn render_error(error: &StatusError) -> String {
    format!("{}\n", error.to_string().red().bold())
}
