//! Core operations of the Shift Roster Engine.
//!
//! This module contains the calendar reconciler that merges day-level edits
//! into stored schedules, the statistics aggregator that derives monthly
//! stats and cross-month earnings history, and the earnings ledger that
//! records per-assignment earnings under the role rules.

mod earnings;
mod reconcile;
mod stats;

pub use earnings::set_assignment_earnings;
pub use reconcile::apply_day_edits;
pub use stats::{compute_earnings_history, compute_monthly_stats};
