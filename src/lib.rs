//! rendezvous - shared-window planning against a bank's opening hours.
//!
//! Given each person's busy periods over a fixed three-day horizon and the
//! bank's daily working hours, both quoted as clock stamps with fixed UTC
//! offsets like `"ПН 12:00+5"`, the crate finds the earliest contiguous
//! window of a requested duration during which the bank is open and every
//! person is simultaneously free, and can step past it to later windows.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use rendezvous::{plan, WorkingHours};
//!
//! let working_hours = WorkingHours::new("10:00+5", "18:00+5");
//! let mut moment = plan(&HashMap::new(), 90, &working_hours).unwrap();
//!
//! assert!(moment.exists());
//! assert_eq!(moment.format("Начинаем в %HH:%MM (%DD)"), "Начинаем в 10:00 (ПН)");
//! assert!(moment.try_later());
//! assert_eq!(moment.format("%HH:%MM"), "10:30");
//! ```

pub mod agenda;
pub mod free_time;
pub mod planner;
pub mod timeline;

/// Identifier type used for the people in a schedule.
pub type Id = String;

pub use agenda::{BusySchedule, ParseError, TimePeriod, WorkingHours};
pub use planner::{plan, Moment, SUPPORTS_TRY_LATER};
