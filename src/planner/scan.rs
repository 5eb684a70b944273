//! Minute-by-minute availability scan.

use crate::free_time::{Availability, Interval};
use crate::timeline::Minutes;

use super::bank::BankHours;

/// Finds the earliest minute in `search` that starts a run of `duration`
/// consecutive minutes where the bank is open and every person is free.
///
/// The run check fires before the current minute is evaluated: once the
/// streak reaches `duration`, the reported start is `minute - duration` and
/// the scan stops without looking further, so the earliest window always
/// wins. A `duration` of zero is therefore satisfied by the very first
/// minute of a non-empty search interval, and a run still open when the
/// search interval ends does not count.
///
/// Cost is O(|search| × people); the horizon bounds it at 4320 iterations.
pub fn find_window(
    search: Interval,
    duration: Minutes,
    bank: &BankHours,
    free: &Availability,
) -> Option<Minutes> {
    let mut streak: Minutes = 0;
    for minute in search.start()..search.end() {
        if streak == duration {
            return Some(minute - duration);
        }
        if bank.is_open(minute) && free.all_free_at(minute) {
            streak += 1;
        } else {
            streak = 0;
        }
    }
    None
}
