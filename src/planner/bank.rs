//! Bank opening hours expanded across the horizon.

use crate::agenda::{DayTime, ParseError, WorkingHours};
use crate::free_time::Interval;
use crate::timeline::{Minutes, HORIZON_DAYS, HORIZON_MINUTES, MINUTES_PER_DAY};

/// The bank's open intervals over the horizon, one per day, plus the UTC
/// offset its hours are quoted in.
///
/// Open time stays a short disjoint list queried by direct membership; it
/// is never merged or inverted.
#[derive(Debug, Clone)]
pub struct BankHours {
    open: Vec<Interval>,
    utc_offset: Minutes,
}

impl BankHours {
    /// Parses one day's working hours and replicates them across the
    /// horizon at one-day steps.
    ///
    /// The bank's offset is read from the closing stamp; each endpoint is
    /// still normalized with its own quoted offset.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when a stamp is malformed or the window
    /// closes before it opens.
    pub fn from_working_hours(hours: &WorkingHours) -> Result<Self, ParseError> {
        let from: DayTime = hours.from.parse()?;
        let to: DayTime = hours.to.parse()?;
        let (opens_at, closes_at) = (from.to_utc_minutes(), to.to_utc_minutes());
        if opens_at > closes_at {
            return Err(ParseError::ReversedPeriod {
                from: hours.from.clone(),
                to: hours.to.clone(),
            });
        }

        let first_day = Interval::new(opens_at, closes_at);
        let open = (0..HORIZON_DAYS)
            .map(|day| first_day.shift(day * MINUTES_PER_DAY))
            .collect();
        Ok(Self {
            open,
            utc_offset: to.utc_offset_minutes(),
        })
    }

    /// Returns true if the bank is open at `minute`.
    pub fn is_open(&self, minute: Minutes) -> bool {
        self.open.iter().any(|interval| interval.contains(minute))
    }

    /// The per-day open intervals.
    pub fn open_intervals(&self) -> &[Interval] {
        &self.open
    }

    /// The bank's UTC offset, in minutes.
    pub const fn utc_offset(&self) -> Minutes {
        self.utc_offset
    }

    /// The full searchable horizon in the shared reference frame: the
    /// bank's three local days.
    pub const fn domain(&self) -> Interval {
        Interval::new(-self.utc_offset, HORIZON_MINUTES - self.utc_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(from: &str, to: &str) -> BankHours {
        BankHours::from_working_hours(&WorkingHours::new(from, to)).unwrap()
    }

    #[test]
    fn expands_to_one_interval_per_day() {
        let bank = bank("10:00+5", "18:00+5");
        assert_eq!(
            bank.open_intervals(),
            &[
                Interval::new(300, 780),
                Interval::new(1740, 2220),
                Interval::new(3180, 3660),
            ]
        );
        assert_eq!(bank.utc_offset(), 300);
    }

    #[test]
    fn domain_covers_three_local_days() {
        assert_eq!(bank("10:00+5", "18:00+5").domain(), Interval::new(-300, 4020));
        assert_eq!(bank("10:00+0", "18:00+0").domain(), Interval::new(0, 4320));
    }

    #[test]
    fn is_open_respects_half_open_windows() {
        let bank = bank("10:00+5", "18:00+5");
        assert!(!bank.is_open(299));
        assert!(bank.is_open(300));
        assert!(bank.is_open(779));
        assert!(!bank.is_open(780));
        assert!(bank.is_open(1740));
        assert!(bank.is_open(3659));
        assert!(!bank.is_open(3660));
    }

    #[test]
    fn zero_length_day_is_never_open() {
        let bank = bank("10:00+5", "10:00+5");
        assert!(!bank.is_open(300));
        assert!(bank.open_intervals().iter().all(Interval::is_empty));
    }

    #[test]
    fn reversed_hours_are_an_error() {
        let result = BankHours::from_working_hours(&WorkingHours::new("18:00+5", "10:00+5"));
        assert_eq!(
            result.map(|_| ()),
            Err(ParseError::ReversedPeriod {
                from: "18:00+5".to_string(),
                to: "10:00+5".to_string(),
            })
        );
    }

    #[test]
    fn offset_comes_from_closing_stamp() {
        let bank = bank("10:00+3", "18:00+5");
        assert_eq!(bank.utc_offset(), 300);
        // The opening stamp still normalizes with its own offset.
        assert_eq!(bank.open_intervals()[0], Interval::new(420, 780));
    }
}
