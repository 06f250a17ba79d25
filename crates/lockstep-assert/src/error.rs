//! Error type raised when a sequence equality check fails.

/// Two sequences failed the lockstep equality check.
///
/// `Display` yields the full rendered failure table; the count fields let
/// callers branch on the kind of failure without re-parsing it.
#[derive(Debug, thiserror::Error)]
#[error("{rendered}")]
pub struct SequenceMismatch {
    /// Human-readable failure description (summary plus per-record rows).
    pub rendered: String,
    /// Number of elements the expected side produced.
    pub expected_count: usize,
    /// Number of elements the actual side produced.
    pub actual_count: usize,
    /// Total mismatches found before detail collection stopped.
    pub mismatch_count: usize,
    /// True if the mismatch cap cut detail collection short.
    pub truncated: bool,
}

/// Convenience alias for check results.
pub type CheckResult<T> = Result<T, SequenceMismatch>;
