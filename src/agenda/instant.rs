//! Parsed forms of the schedule time stamps.
//!
//! Two stamp shapes appear in the input: bank working hours carry a bare
//! clock time (`"10:00+5"`), busy periods qualify it with a weekday
//! (`"ПН 10:00+5"`). Both quote a local clock time together with the fixed
//! UTC offset it is expressed in; conversion to timeline minutes subtracts
//! the offset, so stamps with different offsets land in one shared frame.

use std::str::FromStr;

use super::error::ParseError;
use super::weekday::Weekday;
use crate::timeline::{Minutes, MINUTES_PER_HOUR};

/// Clock time plus the UTC offset it is quoted in, e.g. `"10:00+5"`.
///
/// The hour is one or two digits, the minute exactly two, the offset a
/// non-negative whole number of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTime {
    hour: i64,
    minute: i64,
    utc_offset: i64,
}

impl DayTime {
    /// Minute value in the shared reference frame: the quoted local time
    /// normalized by its own offset. May be negative.
    pub const fn to_utc_minutes(&self) -> Minutes {
        self.hour * MINUTES_PER_HOUR + self.minute - self.utc_offset * MINUTES_PER_HOUR
    }

    /// The quoted UTC offset, in minutes.
    pub const fn utc_offset_minutes(&self) -> Minutes {
        self.utc_offset * MINUTES_PER_HOUR
    }
}

/// Weekday-qualified clock time, e.g. `"ПН 10:00+5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekTime {
    weekday: Weekday,
    time: DayTime,
}

impl WeekTime {
    /// Absolute minute in the shared reference frame: the weekday's base
    /// offset plus the normalized clock time.
    pub const fn to_utc_minutes(&self) -> Minutes {
        self.weekday.minute_offset() + self.time.to_utc_minutes()
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for DayTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedClock(s.to_string());

        let (clock, offset) = s.split_once('+').ok_or_else(malformed)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(malformed)?;
        if hour.len() > 2 || minute.len() != 2 {
            return Err(malformed());
        }
        let hour = parse_digits(hour).ok_or_else(malformed)?;
        let minute = parse_digits(minute).ok_or_else(malformed)?;
        let utc_offset = parse_digits(offset).ok_or_else(malformed)?;
        if hour > 23 || minute > 59 {
            return Err(ParseError::ClockOutOfRange(s.to_string()));
        }

        Ok(Self {
            hour,
            minute,
            utc_offset,
        })
    }
}

impl FromStr for WeekTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, clock) = s
            .split_once(' ')
            .ok_or_else(|| ParseError::MalformedClock(s.to_string()))?;
        Ok(Self {
            weekday: day.parse()?,
            time: clock.parse()?,
        })
    }
}
