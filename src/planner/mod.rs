//! Planning: expand bank hours, normalize busy periods, scan for a window.
//!
//! [`plan`] is the crate's entry point. It parses the working hours into
//! per-day open intervals, turns each person's busy list into their free
//! set (merge, then complement within the three-day domain), runs the
//! minute scan, and hands back a [`Moment`] that can be queried, formatted
//! and stepped to later windows.

mod bank;
mod moment;
mod scan;


pub use bank::BankHours;
pub use moment::Moment;
pub use scan::find_window;

use tracing::debug;

use crate::agenda::{BusySchedule, ParseError, TimePeriod, WorkingHours};
use crate::free_time::{Availability, IntervalSet};
use crate::timeline::Minutes;

/// Whether [`Moment::try_later`] re-querying is available in this build.
pub const SUPPORTS_TRY_LATER: bool = true;

/// Finds the earliest window of `duration` minutes within the three-day
/// horizon where the bank is open and every person in `schedule` is free.
///
/// `duration` is a non-negative count of minutes; zero is satisfied at the
/// very start of the horizon. An empty schedule constrains nothing, so the
/// bank's opening time wins.
///
/// # Errors
///
/// Returns a [`ParseError`] when any busy-period stamp or working-hours
/// stamp is malformed, or when a period ends before it starts.
pub fn plan(
    schedule: &BusySchedule,
    duration: Minutes,
    working_hours: &WorkingHours,
) -> Result<Moment, ParseError> {
    let bank = BankHours::from_working_hours(working_hours)?;
    let domain = bank.domain();

    let mut free = Availability::with_capacity(schedule.len());
    for (person, periods) in schedule {
        let busy = periods
            .iter()
            .map(TimePeriod::to_interval)
            .collect::<Result<Vec<_>, _>>()?;
        free.insert(person.clone(), IntervalSet::from(busy).complement(domain));
    }

    debug!(
        people = schedule.len(),
        duration,
        %domain,
        "searching for a shared window"
    );
    let found = scan::find_window(domain, duration, &bank, &free);
    Ok(Moment::new(bank, free, domain, duration, found))
}
