//! Paired traversal: lockstep advancement of two sequences.
//!
//! Both inputs are consumed lazily, one element at a time, expected side
//! first. An exhausted side is never pulled again; the loop ends once
//! neither side produces an element. Positions where only one side produced
//! an element contribute to the length counts but are never individually
//! compared.

use crate::accumulator::ContextAccumulator;
use crate::limits::CompareLimits;
use crate::record::{ComparisonRecord, DiffReport};

/// Compare two sequences in lockstep using `PartialEq`.
///
/// Returns a [`DiffReport`] whose retained detail is bounded by `limits`
/// regardless of input length. Never fails: unequal lengths and mismatched
/// elements are report outcomes, not errors. An input iterator that never
/// terminates makes this call never return; that is the caller's contract.
pub fn compare<T, E, A>(expected: E, actual: A, limits: &CompareLimits) -> DiffReport<T>
where
    T: PartialEq,
    E: IntoIterator<Item = T>,
    A: IntoIterator<Item = T>,
{
    compare_by(expected, actual, limits, |e, a| e == a)
}

/// Compare two sequences in lockstep with a caller-supplied comparer.
///
/// The comparer is consulted once per position where both sides produced an
/// element, and not at all once the mismatch cap has been hit.
pub fn compare_by<T, E, A, F>(expected: E, actual: A, limits: &CompareLimits, mut eq: F) -> DiffReport<T>
where
    E: IntoIterator<Item = T>,
    A: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut expected = expected.into_iter();
    let mut actual = actual.into_iter();
    let mut accumulator = ContextAccumulator::new(*limits);

    let mut expected_count = 0usize;
    let mut actual_count = 0usize;
    let mut divergence_index = None;
    let mut has_expected = true;
    let mut has_actual = true;

    for index in 0.. {
        // An exhausted side is never pulled again.
        let exp = if has_expected { expected.next() } else { None };
        has_expected = exp.is_some();
        if has_expected {
            expected_count += 1;
        }

        let act = if has_actual { actual.next() } else { None };
        has_actual = act.is_some();
        if has_actual {
            actual_count += 1;
        }

        match (exp, act) {
            (Some(e), Some(a)) => {
                // Once capped, only the length counts are still of interest.
                if !accumulator.is_capped() {
                    let matched = eq(&e, &a);
                    accumulator.observe(ComparisonRecord::paired(index, matched, e, a));
                }
            }
            (None, None) => break,
            _ => {
                divergence_index.get_or_insert(index);
            }
        }
    }

    accumulator.finish(expected_count, actual_count, divergence_index)
}
