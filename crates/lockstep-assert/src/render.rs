//! Textual rendering of diff reports.
//!
//! Produces the failure table shown to a human: a summary of what differed,
//! then one row per retained record with a `->` marker on mismatched rows.

use std::fmt::Debug;

use lockstep_core::DiffReport;

/// Render a report into a human-readable description.
///
/// A passing report renders as a one-line confirmation; a failing report
/// renders the summary clauses and the retained records as an aligned table.
pub fn render_report<T: Debug>(report: &DiffReport<T>) -> String {
    if report.passed() {
        return format!("sequences are equal ({} items)", report.expected_count);
    }

    let mut out = String::from("sequences are not equal: found ");
    out.push_str(&summary_clauses(report).join(" and "));

    if !report.records.is_empty() {
        out.push(':');
        for record in &report.records {
            let marker = if record.matched { "    " } else { " -> " };
            out.push('\n');
            out.push_str(&format!(
                "{:>4}{}{:>16}, {:>16}",
                record.index,
                marker,
                cell(&record.expected),
                cell(&record.actual),
            ));
        }
    }
    out
}

fn summary_clauses<T>(report: &DiffReport<T>) -> Vec<String> {
    let mut clauses = Vec::new();

    if report.expected_count != report.actual_count {
        clauses.push(match report.divergence_index {
            Some(index) => format!(
                "different lengths ({} != {}, diverging at index {})",
                report.expected_count, report.actual_count, index
            ),
            None => format!(
                "different lengths ({} != {})",
                report.expected_count, report.actual_count
            ),
        });
    }

    if report.mismatch_count > 0 {
        clauses.push(if report.truncated {
            format!(
                "first {} non-equal items (stopped searching)",
                report.mismatch_count
            )
        } else {
            format!("{} non-equal items", report.mismatch_count)
        });
    } else if report.truncated {
        // max_mismatches = 0: a mismatch was seen but never counted.
        clauses.push("non-equal items (detail collection capped at zero)".to_string());
    }

    clauses
}

fn cell<T: Debug>(value: &Option<T>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "-".to_string(),
    }
}
