//! Schedule input contract: busy periods and bank working hours.
//!
//! A [`BusySchedule`] maps person ids to their busy [`TimePeriod`]s, each
//! endpoint a stamp like `"ПН 12:00+5"`; [`WorkingHours`] carries the bank's
//! daily opening window as bare clock stamps like `"10:00+5"`. With the
//! `serde` cargo feature enabled, both derive `Serialize`/`Deserialize` so a
//! schedule loads directly from JSON.

use std::collections::HashMap;

mod error;
mod instant;
mod weekday;

pub use error::ParseError;
pub use instant::{DayTime, WeekTime};
pub use weekday::Weekday;

use crate::free_time::Interval;
use crate::Id;

/// One busy period: weekday-qualified start and end stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimePeriod {
    pub from: String,
    pub to: String,
}

impl TimePeriod {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parses both endpoints into a reference-frame interval.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when either stamp is malformed or when the
    /// period ends before it starts.
    pub fn to_interval(&self) -> Result<Interval, ParseError> {
        let from: WeekTime = self.from.parse()?;
        let to: WeekTime = self.to.parse()?;
        let (start, end) = (from.to_utc_minutes(), to.to_utc_minutes());
        if start > end {
            return Err(ParseError::ReversedPeriod {
                from: self.from.clone(),
                to: self.to.clone(),
            });
        }
        Ok(Interval::new(start, end))
    }
}

/// A bank's daily opening window, applied identically to every day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingHours {
    pub from: String,
    pub to: String,
}

impl WorkingHours {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Busy periods per person; list order carries no meaning.
pub type BusySchedule = HashMap<Id, Vec<TimePeriod>>;
