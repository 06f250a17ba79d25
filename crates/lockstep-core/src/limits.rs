//! Detail-collection limits for a comparison.

use serde::{Deserialize, Serialize};

/// Equal-context entries kept before and after each mismatch by default.
pub const DEFAULT_HALF_WINDOW: usize = 4;

/// Default cap on mismatches whose surrounding context is retained.
pub const DEFAULT_MAX_MISMATCHES: usize = 64;

/// Hard caps on how much detail a comparison retains.
///
/// The count fields of a [`crate::DiffReport`] always reflect the full
/// traversal; these limits only bound the recorded detail, so pathological
/// inputs (millions of mismatches) cannot blow memory or flood output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareLimits {
    /// Equal-context entries kept before *and* after each mismatch.
    ///
    /// A value of 4 means a mismatch is shown with up to 4 equal entries on
    /// either side (total context window 8). Zero keeps mismatches only.
    pub half_window: usize,
    /// Cap on mismatches whose surrounding context is retained.
    ///
    /// Once reached, the traversal still finishes the length counts but no
    /// further detail is collected and the report is marked truncated.
    pub max_mismatches: usize,
}

impl Default for CompareLimits {
    fn default() -> Self {
        Self {
            half_window: DEFAULT_HALF_WINDOW,
            max_mismatches: DEFAULT_MAX_MISMATCHES,
        }
    }
}

impl CompareLimits {
    /// Create limits with explicit values.
    pub fn new(half_window: usize, max_mismatches: usize) -> Self {
        Self {
            half_window,
            max_mismatches,
        }
    }

    /// Total equal-context entries around a single mismatch (before + after).
    pub fn context_window(&self) -> usize {
        self.half_window * 2
    }

    /// Upper bound on the number of records a report can retain.
    pub fn record_bound(&self) -> usize {
        self.max_mismatches * (self.context_window() + 1)
    }
}
