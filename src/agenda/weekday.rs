//! Weekday codes and their positions on the timeline.

use std::fmt::Display;
use std::str::FromStr;

use super::error::ParseError;
use crate::timeline::{Minutes, MINUTES_PER_DAY};

/// Day of the week, written as a Cyrillic two-letter code in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, in timeline order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The two-letter code used in schedule strings.
    pub const fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "ПН",
            Weekday::Tuesday => "ВТ",
            Weekday::Wednesday => "СР",
            Weekday::Thursday => "ЧТ",
            Weekday::Friday => "ПТ",
            Weekday::Saturday => "СБ",
            Weekday::Sunday => "ВС",
        }
    }

    /// Looks a day up by its two-letter code.
    pub fn from_code(code: &str) -> Option<Weekday> {
        Self::ALL.into_iter().find(|day| day.code() == code)
    }

    /// Position within the week, Monday = 0.
    pub const fn day_index(self) -> i64 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Day at the given position within the week, Monday = 0.
    pub fn from_day_index(index: i64) -> Option<Weekday> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Minute offset of this day's midnight from Monday 00:00.
    pub const fn minute_offset(self) -> Minutes {
        self.day_index() * MINUTES_PER_DAY
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseError::UnknownWeekday(s.to_string()))
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
