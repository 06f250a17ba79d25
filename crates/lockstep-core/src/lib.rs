//! Bounded-memory lockstep sequence comparison.
//!
//! Walks two sequences in lockstep (positional, zip-style, no alignment) and
//! produces a diagnosable diff report whose size is bounded regardless of
//! input length: up to a fixed number of equal entries is kept around each
//! mismatch, and detail collection stops once a mismatch cap is reached while
//! the traversal still finishes the length counts.
//!
//! # Key Types
//!
//! - [`compare`] / [`compare_by`] — Lockstep comparison of two `IntoIterator`s
//! - [`DiffReport`] / [`ComparisonRecord`] — The bounded result and its entries
//! - [`CompareLimits`] — Context-window and mismatch-cap configuration
//! - [`ContextAccumulator`] — The bounded-context state machine
//! - [`RecencyWindow`] — Fixed-capacity ring of recent equal records

pub mod accumulator;
pub mod engine;
pub mod limits;
pub mod record;
pub mod window;

pub use accumulator::ContextAccumulator;
pub use engine::{compare, compare_by};
pub use limits::CompareLimits;
pub use record::{ComparisonRecord, DiffReport};
pub use window::RecencyWindow;
