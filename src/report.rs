//! Change report accumulation and printing.
//!
//! This module is separate from the injection logic to allow tid to be used
//! as a library without printing side effects. The report is purely
//! observational: counters are populated incrementally during the walk and
//! have no effect on the output file.

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use crate::detect::ComponentSet;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Maximum number of example identifiers shown in the report.
const MAX_EXAMPLES: usize = 10;

/// Counts of identifiers emitted during one run, grouped by type prefix
/// (the portion of the identifier before its first `-`).
#[derive(Debug, Default)]
pub struct ChangeReport {
    added: usize,
    type_counts: BTreeMap<String, usize>,
    emitted: Vec<String>,
}

impl ChangeReport {
    /// Record one emitted identifier.
    pub fn record(&mut self, test_id: &str) {
        self.added += 1;
        let prefix = test_id.split('-').next().unwrap_or(test_id);
        *self.type_counts.entry(prefix.to_string()).or_insert(0) += 1;
        self.emitted.push(test_id.to_string());
    }

    /// Total identifiers added in this run.
    pub fn added(&self) -> usize {
        self.added
    }

    /// All emitted identifiers, in document order.
    pub fn emitted(&self) -> &[String] {
        &self.emitted
    }

    pub fn type_counts(&self) -> &BTreeMap<String, usize> {
        &self.type_counts
    }
}

/// Print the human-readable run summary to stdout.
pub fn print(components: &ComponentSet, report: &ChangeReport, output_path: &Path) {
    println!("{}", format_report(components, report, output_path));
}

fn format_report(components: &ComponentSet, report: &ChangeReport, output_path: &Path) -> String {
    let mut out = String::new();

    if components.used_fallback() {
        out.push_str("No Chakra UI imports found, using default component list.\n");
    }
    out.push_str(&format!(
        "{} {}\n",
        "Detected Chakra UI components:".bold(),
        components.sorted_names().join(", ")
    ));

    out.push_str(&format!(
        "{} Added {} {} attributes\n",
        SUCCESS_MARK.green(),
        report.added(),
        crate::visitor::TESTID_ATTR
    ));
    out.push_str(&format!(
        "{} Output written to: {}\n",
        SUCCESS_MARK.green(),
        output_path.display()
    ));

    if report.added() > 0 {
        out.push_str(&format!("\n{}\n", "Summary of component types:".bold()));
        for (prefix, count) in report.type_counts() {
            out.push_str(&format!("  {}: {}\n", prefix, count));
        }

        out.push_str(&format!("\n{}\n", "Example test IDs:".bold()));
        for (i, test_id) in report.emitted().iter().take(MAX_EXAMPLES).enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, test_id.cyan()));
        }
        let remaining = report.added().saturating_sub(MAX_EXAMPLES);
        if remaining > 0 {
            out.push_str(&format!("  ... and {} more\n", remaining));
        }
    }

    // Trailing newline comes from the caller's println.
    out.truncate(out.trim_end_matches('\n').len());
    out
}
