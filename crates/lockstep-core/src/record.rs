//! Comparison records and the final diff report.

use serde::{Deserialize, Serialize};

/// A single classified position from the paired traversal.
///
/// Immutable once created; positions where only one side still produced an
/// element are counted in the report totals but never recorded individually,
/// so recorded entries carry both values in practice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord<T> {
    /// Zero-based position in the paired traversal.
    pub index: usize,
    /// Whether the two sides compared equal at this position.
    pub matched: bool,
    /// The expected-side element, absent once that side is exhausted.
    pub expected: Option<T>,
    /// The actual-side element, absent once that side is exhausted.
    pub actual: Option<T>,
}

impl<T> ComparisonRecord<T> {
    /// Create a record for a position where both sides produced an element.
    pub fn paired(index: usize, matched: bool, expected: T, actual: T) -> Self {
        Self {
            index,
            matched,
            expected: Some(expected),
            actual: Some(actual),
        }
    }
}

/// The result of comparing two sequences in lockstep.
///
/// `records` holds only the bounded context around each mismatch; the count
/// fields always reflect the full traversal, even once detail collection has
/// been truncated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffReport<T> {
    /// The retained records, in traversal order.
    pub records: Vec<ComparisonRecord<T>>,
    /// Number of positions where the expected side produced an element.
    pub expected_count: usize,
    /// Number of positions where the actual side produced an element.
    pub actual_count: usize,
    /// Total mismatches found before detail collection stopped.
    pub mismatch_count: usize,
    /// True once the mismatch cap was hit and detail collection stopped.
    pub truncated: bool,
    /// First index at which exactly one side still produced an element.
    pub divergence_index: Option<usize>,
}

impl<T> DiffReport<T> {
    /// Returns `true` if the sequences compared equal end to end.
    ///
    /// The `truncated` clause only matters for the degenerate
    /// `max_mismatches = 0` configuration, where a mismatch caps the
    /// accumulator before being counted.
    pub fn passed(&self) -> bool {
        self.mismatch_count == 0 && !self.truncated && self.expected_count == self.actual_count
    }

    /// Returns `true` if no records were retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of retained records that compared equal (context entries).
    pub fn matches(&self) -> usize {
        self.records.iter().filter(|r| r.matched).count()
    }

    /// Number of retained records that compared unequal.
    ///
    /// At most [`DiffReport::mismatch_count`], with equality unless truncated.
    pub fn mismatches(&self) -> usize {
        self.records.iter().filter(|r| !r.matched).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(records: Vec<ComparisonRecord<u32>>) -> DiffReport<u32> {
        DiffReport {
            records,
            expected_count: 3,
            actual_count: 3,
            mismatch_count: 0,
            truncated: false,
            divergence_index: None,
        }
    }

    #[test]
    fn empty_report_with_equal_counts_passes() {
        let report = make_report(vec![]);
        assert!(report.passed());
        assert!(report.is_empty());
    }

    #[test]
    fn mismatch_count_fails_report() {
        let mut report = make_report(vec![ComparisonRecord::paired(1, false, 2, 9)]);
        report.mismatch_count = 1;
        assert!(!report.passed());
        assert_eq!(report.mismatches(), 1);
        assert_eq!(report.matches(), 0);
    }

    #[test]
    fn count_difference_fails_report() {
        let mut report = make_report(vec![]);
        report.actual_count = 2;
        report.divergence_index = Some(2);
        assert!(!report.passed());
    }

    #[test]
    fn truncated_report_never_passes() {
        let mut report = make_report(vec![]);
        report.truncated = true;
        assert!(!report.passed());
    }

    #[test]
    fn match_and_mismatch_counters() {
        let mut report = make_report(vec![
            ComparisonRecord::paired(0, true, 1, 1),
            ComparisonRecord::paired(1, false, 2, 9),
            ComparisonRecord::paired(2, true, 3, 3),
        ]);
        report.mismatch_count = 1;
        assert_eq!(report.len(), 3);
        assert_eq!(report.matches(), 2);
        assert_eq!(report.mismatches(), 1);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = make_report(vec![ComparisonRecord::paired(1, false, 2, 9)]);
        report.mismatch_count = 1;

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mismatch_count"], 1);
        assert_eq!(json["records"][0]["index"], 1);
        assert_eq!(json["records"][0]["matched"], false);
        assert_eq!(json["records"][0]["expected"], 2);
        assert_eq!(json["records"][0]["actual"], 9);
    }

    #[test]
    fn report_roundtrips_through_json() {
        let mut report = make_report(vec![ComparisonRecord::paired(0, true, 1, 1)]);
        report.divergence_index = Some(3);

        let json = serde_json::to_string(&report).unwrap();
        let back: DiffReport<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
