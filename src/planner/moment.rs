//! The planned moment: query it, format it, step to a later window.

use tracing::trace;

use crate::agenda::Weekday;
use crate::free_time::{Availability, Interval};
use crate::timeline::{Minutes, MINUTES_PER_DAY, MINUTES_PER_HOUR};

use super::bank::BankHours;
use super::scan;

/// Minutes skipped past the current start when stepping to a later window.
const TRY_LATER_STEP: Minutes = 30;

/// Outcome of planning: the found start minute, if any, plus everything
/// needed to re-run the search further along the horizon.
///
/// The handle owns its search state; only [`Moment::try_later`] replaces
/// the held start, and only when a later window exists.
#[derive(Debug, Clone)]
pub struct Moment {
    bank: BankHours,
    free: Availability,
    domain: Interval,
    duration: Minutes,
    found: Option<Minutes>,
}

impl Moment {
    pub(super) fn new(
        bank: BankHours,
        free: Availability,
        domain: Interval,
        duration: Minutes,
        found: Option<Minutes>,
    ) -> Self {
        Self {
            bank,
            free,
            domain,
            duration,
            found,
        }
    }

    /// Returns true if a start minute was found.
    pub fn exists(&self) -> bool {
        self.found.is_some()
    }

    /// The found start minute in the shared reference frame.
    pub fn start(&self) -> Option<Minutes> {
        self.found
    }

    /// Renders the found start into `template`, substituting each of the
    /// literal tokens `%DD` (weekday code), `%HH` (zero-padded hour) and
    /// `%MM` (zero-padded minute) at most once; absent tokens are left
    /// untouched. Returns an empty string when nothing was found.
    pub fn format(&self, template: &str) -> String {
        let Some(start) = self.found else {
            return String::new();
        };

        // Back into the bank's local frame, which spans [0, HORIZON_MINUTES).
        let local = start + self.bank.utc_offset();
        let day = local / MINUTES_PER_DAY;
        let hour = (local % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
        let minute = local % MINUTES_PER_HOUR;
        let code = Weekday::from_day_index(day).map_or("", Weekday::code);

        template
            .replacen("%DD", code, 1)
            .replacen("%HH", &format!("{hour:02}"), 1)
            .replacen("%MM", &format!("{minute:02}"), 1)
    }

    /// Re-runs the search starting half an hour after the current start.
    ///
    /// On success the held start is replaced and `true` is returned;
    /// otherwise the held start stays untouched. Without a current start
    /// there is nothing to step past, so the call returns `false`.
    pub fn try_later(&mut self) -> bool {
        let Some(previous) = self.found else {
            return false;
        };

        let from = (previous + TRY_LATER_STEP).min(self.domain.end());
        let search = Interval::new(from, self.domain.end());
        match scan::find_window(search, self.duration, &self.bank, &self.free) {
            Some(next) => {
                trace!(previous, next, "stepped to a later window");
                self.found = Some(next);
                true
            }
            None => false,
        }
    }
}
