//! Execution of the comparison command.

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;

use lockstep_core::{compare, CompareLimits, DiffReport};

use crate::cli::{Cli, OutputFormat};

/// Run the comparison; returns whether the sequences compared equal.
pub fn run(cli: Cli) -> anyhow::Result<bool> {
    let limits = CompareLimits::new(cli.half_window, cli.max_mismatches);
    debug!(
        half_window = limits.half_window,
        max_mismatches = limits.max_mismatches,
        "comparing line sequences"
    );

    let (expected_lines, expected_err) = line_source(&cli.expected)?;
    let (actual_lines, actual_err) = line_source(&cli.actual)?;

    let report = compare(expected_lines, actual_lines, &limits);

    // A read error mid-stream would otherwise masquerade as a short file.
    check_source(&expected_err, &cli.expected)?;
    check_source(&actual_err, &cli.actual)?;

    debug!(
        expected = report.expected_count,
        actual = report.actual_count,
        mismatches = report.mismatch_count,
        truncated = report.truncated,
        "comparison complete"
    );

    match cli.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_text(&report),
    }
    Ok(report.passed())
}

type SharedError = Rc<RefCell<Option<std::io::Error>>>;

/// Lazily yields lines from a file, parking the first read error in a shared
/// cell and ending the stream.
///
/// The engine consumes plain `String` items, so without the cell a
/// mid-stream error would be indistinguishable from a short file.
struct LineSource {
    lines: Lines<BufReader<File>>,
    error: SharedError,
}

fn line_source(path: &Path) -> anyhow::Result<(LineSource, SharedError)> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let error = Rc::new(RefCell::new(None));
    let source = LineSource {
        lines: BufReader::new(file).lines(),
        error: Rc::clone(&error),
    };
    Ok((source, error))
}

impl Iterator for LineSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.borrow().is_some() {
            return None;
        }
        match self.lines.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(err)) => {
                *self.error.borrow_mut() = Some(err);
                None
            }
            None => None,
        }
    }
}

fn check_source(error: &SharedError, path: &Path) -> anyhow::Result<()> {
    match error.borrow_mut().take() {
        Some(err) => Err(err).with_context(|| format!("reading {}", path.display())),
        None => Ok(()),
    }
}

fn print_json(report: &DiffReport<String>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_text(report: &DiffReport<String>) {
    if report.passed() {
        println!(
            "{} {} lines compared equal",
            "✓".green().bold(),
            report.expected_count
        );
        return;
    }

    println!("{} {}", "✗".red().bold(), summary(report));
    for record in &report.records {
        // 1-based line numbers for humans; the JSON output keeps raw indices.
        let line = format!("{:>6}", record.index + 1);
        let expected = record.expected.as_deref().unwrap_or("<absent>");
        let actual = record.actual.as_deref().unwrap_or("<absent>");
        if record.matched {
            println!(
                "{}    {} | {}",
                line.dimmed(),
                expected.dimmed(),
                actual.dimmed()
            );
        } else {
            println!(
                "{} {} {} | {}",
                line.red().bold(),
                "->".red().bold(),
                expected.red(),
                actual.red()
            );
        }
    }
    if report.truncated {
        println!(
            "{}",
            format!("(stopped after {} mismatches)", report.mismatch_count).yellow()
        );
    }
}

fn summary(report: &DiffReport<String>) -> String {
    let mut clauses = Vec::new();

    if report.expected_count != report.actual_count {
        let diverging = report
            .divergence_index
            .map(|i| format!(", diverging at line {}", i + 1))
            .unwrap_or_default();
        clauses.push(format!(
            "line counts differ ({} vs {}{})",
            report.expected_count, report.actual_count, diverging
        ));
    }
    if report.mismatch_count > 0 {
        clauses.push(format!("{} mismatched lines", report.mismatch_count));
    }
    if clauses.is_empty() && report.truncated {
        clauses.push("mismatches found (detail collection capped at zero)".to_string());
    }

    clauses.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn make_cli(expected: &Path, actual: &Path) -> Cli {
        Cli {
            expected: expected.to_path_buf(),
            actual: actual.to_path_buf(),
            half_window: 4,
            max_mismatches: 64,
            format: OutputFormat::Text,
            verbose: false,
        }
    }

    #[test]
    fn equal_files_pass() {
        let expected = write_temp("a\nb\nc\n");
        let actual = write_temp("a\nb\nc\n");
        assert!(run(make_cli(expected.path(), actual.path())).unwrap());
    }

    #[test]
    fn differing_files_fail() {
        let expected = write_temp("a\nb\nc\n");
        let actual = write_temp("a\nX\nc\n");
        assert!(!run(make_cli(expected.path(), actual.path())).unwrap());
    }

    #[test]
    fn shorter_file_fails_on_counts() {
        let expected = write_temp("a\nb\nc\n");
        let actual = write_temp("a\nb\n");
        assert!(!run(make_cli(expected.path(), actual.path())).unwrap());
    }

    #[test]
    fn json_format_also_runs() {
        let expected = write_temp("a\n");
        let actual = write_temp("b\n");
        let mut cli = make_cli(expected.path(), actual.path());
        cli.format = OutputFormat::Json;
        assert!(!run(cli).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let actual = write_temp("a\n");
        let cli = make_cli(&PathBuf::from("/definitely/not/here"), actual.path());
        assert!(run(cli).is_err());
    }

    #[test]
    fn line_source_yields_lines_in_order() {
        let file = write_temp("one\ntwo\nthree\n");
        let (source, error) = line_source(file.path()).unwrap();
        let lines: Vec<String> = source.collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
        assert!(error.borrow().is_none());
    }
}
