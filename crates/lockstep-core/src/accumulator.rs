//! Bounded context accumulation over classified comparison records.
//!
//! Consumes the classified-position stream from the traversal engine and
//! retains only the context window around each mismatch: up to `half_window`
//! equal records immediately before, the mismatch itself, and up to
//! `half_window` equal records after. Once `max_mismatches` is reached the
//! accumulator caps itself and ignores further records; the engine keeps
//! running to finish the length counts.

use crate::limits::CompareLimits;
use crate::record::{ComparisonRecord, DiffReport};
use crate::window::RecencyWindow;

/// Detail-collection state, advanced once per classified record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailState {
    /// Between context windows: equal records go into the recency ring.
    Idle,
    /// A mismatch was just recorded: the next `remaining` equal records are
    /// appended to the output as trailing context. Never stored with
    /// `remaining == 0`.
    CollectingAfter { remaining: usize },
    /// The mismatch cap was hit; all further records are ignored.
    Capped,
}

/// Accumulates the bounded diff detail for one comparison.
#[derive(Clone, Debug)]
pub struct ContextAccumulator<T> {
    limits: CompareLimits,
    state: DetailState,
    before: RecencyWindow<ComparisonRecord<T>>,
    records: Vec<ComparisonRecord<T>>,
    mismatch_count: usize,
}

impl<T> ContextAccumulator<T> {
    /// Create an accumulator for a single comparison run.
    pub fn new(limits: CompareLimits) -> Self {
        Self {
            limits,
            state: DetailState::Idle,
            before: RecencyWindow::new(limits.half_window),
            records: Vec::new(),
            mismatch_count: 0,
        }
    }

    /// Returns `true` once the mismatch cap has been hit.
    ///
    /// The engine skips the equality test entirely from this point on, which
    /// freezes `mismatch_count` at the cap value.
    pub fn is_capped(&self) -> bool {
        self.state == DetailState::Capped
    }

    /// Mismatches counted so far.
    pub fn mismatch_count(&self) -> usize {
        self.mismatch_count
    }

    /// Feed the next classified record from the traversal.
    pub fn observe(&mut self, record: ComparisonRecord<T>) {
        if self.state == DetailState::Capped {
            return;
        }
        if record.matched {
            self.observe_equal(record);
        } else {
            self.observe_mismatch(record);
        }
    }

    fn observe_equal(&mut self, record: ComparisonRecord<T>) {
        match self.state {
            DetailState::CollectingAfter { remaining } => {
                self.records.push(record);
                if remaining == 1 {
                    // Trailing context complete; cap only takes effect once
                    // the last recorded mismatch has its full window.
                    self.state = self.capped_or_idle();
                } else {
                    self.state = DetailState::CollectingAfter {
                        remaining: remaining - 1,
                    };
                }
            }
            DetailState::Idle => self.before.push(record),
            DetailState::Capped => {}
        }
    }

    fn observe_mismatch(&mut self, record: ComparisonRecord<T>) {
        if self.mismatch_count >= self.limits.max_mismatches {
            self.state = DetailState::Capped;
            return;
        }

        // Pending-before context flushes in chronological order, then the
        // mismatch itself; the ring restarts empty for the next window.
        self.records.extend(self.before.drain_ordered());
        self.records.push(record);
        self.mismatch_count += 1;

        self.state = if self.limits.half_window == 0 {
            self.capped_or_idle()
        } else {
            DetailState::CollectingAfter {
                remaining: self.limits.half_window,
            }
        };
    }

    fn capped_or_idle(&self) -> DetailState {
        if self.mismatch_count >= self.limits.max_mismatches {
            DetailState::Capped
        } else {
            DetailState::Idle
        }
    }

    /// Finish the run, combining the retained detail with the traversal
    /// totals into the final report.
    pub fn finish(
        self,
        expected_count: usize,
        actual_count: usize,
        divergence_index: Option<usize>,
    ) -> DiffReport<T> {
        DiffReport {
            truncated: self.state == DetailState::Capped,
            records: self.records,
            expected_count,
            actual_count,
            mismatch_count: self.mismatch_count,
            divergence_index,
        }
    }
}
