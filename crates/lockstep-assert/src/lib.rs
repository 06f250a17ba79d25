//! Pass/fail assembly over lockstep diff reports.
//!
//! The core comparator returns a [`lockstep_core::DiffReport`] and makes no
//! pass/fail decision itself. This crate is the collaborator layer that
//! does: a failing report becomes a [`SequenceMismatch`] error carrying a
//! rendered failure table, a passing report is a no-op.
//!
//! # Key Types
//!
//! - [`check_eq`] / [`check_eq_with`] — Result-returning equality checks
//! - [`assert_seq_eq`] — Panicking variant for use in tests
//! - [`SequenceMismatch`] — The failure error, `Display`ing the table
//! - [`render_report`] — Report-to-text rendering

pub mod check;
pub mod error;
pub mod render;

pub use check::{assert_seq_eq, check_eq, check_eq_with};
pub use error::{CheckResult, SequenceMismatch};
pub use render::render_report;
