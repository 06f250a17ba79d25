//! Result-returning and panicking sequence equality checks.

use std::fmt::Debug;

use lockstep_core::{compare, CompareLimits};

use crate::error::{CheckResult, SequenceMismatch};
use crate::render::render_report;

/// Check two sequences for lockstep equality with default limits.
///
/// Passes iff every paired position compares equal and both sequences
/// produced the same number of elements.
pub fn check_eq<T, E, A>(expected: E, actual: A) -> CheckResult<()>
where
    T: PartialEq + Debug,
    E: IntoIterator<Item = T>,
    A: IntoIterator<Item = T>,
{
    check_eq_with(expected, actual, &CompareLimits::default())
}

/// Check two sequences for lockstep equality with explicit limits.
pub fn check_eq_with<T, E, A>(expected: E, actual: A, limits: &CompareLimits) -> CheckResult<()>
where
    T: PartialEq + Debug,
    E: IntoIterator<Item = T>,
    A: IntoIterator<Item = T>,
{
    let report = compare(expected, actual, limits);
    if report.passed() {
        return Ok(());
    }
    Err(SequenceMismatch {
        rendered: render_report(&report),
        expected_count: report.expected_count,
        actual_count: report.actual_count,
        mismatch_count: report.mismatch_count,
        truncated: report.truncated,
    })
}

/// Panic with the rendered failure table unless the sequences are equal.
///
/// Intended for tests, where the panic message becomes the failure output.
pub fn assert_seq_eq<T, E, A>(expected: E, actual: A)
where
    T: PartialEq + Debug,
    E: IntoIterator<Item = T>,
    A: IntoIterator<Item = T>,
{
    if let Err(err) = check_eq(expected, actual) {
        panic!("{err}");
    }
}
