//! Minute-granularity timeline vocabulary.
//!
//! Everything in the crate is measured in whole minutes on a single
//! timeline anchored at Monday 00:00 of the shared reference frame.
//! Schedule stamps quote local clock times with a fixed UTC offset; parsing
//! normalizes them onto this timeline, and formatting shifts a found minute
//! back into the bank's local frame.

/// Count of minutes on the unified timeline.
pub type Minutes = i64;

pub const MINUTES_PER_HOUR: Minutes = 60;
pub const MINUTES_PER_DAY: Minutes = 24 * MINUTES_PER_HOUR;

/// Number of days availability is evaluated over.
pub const HORIZON_DAYS: i64 = 3;

/// Length of the full search horizon.
pub const HORIZON_MINUTES: Minutes = HORIZON_DAYS * MINUTES_PER_DAY;
