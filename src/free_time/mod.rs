//! Free-time bookkeeping: interval algebra and per-person availability.
//!
//! [`Interval`] is a half-open minute range, [`IntervalSet`] keeps a list of
//! them canonical (sorted, pairwise non-overlapping), and [`Availability`]
//! maps each person to their free set and answers the minute-membership
//! queries the planner's scan relies on.

mod availability;
mod interval;
mod interval_set;
pub mod ops;

pub use availability::Availability;
pub use interval::Interval;
pub use interval_set::IntervalSet;
