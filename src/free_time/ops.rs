//! Interval set operations.

use super::interval::Interval;

/// Returns true if `intervals` is canonical: sorted by start and pairwise
/// non-overlapping (`prev.end <= next.start`).
pub fn is_canonical(intervals: &[Interval]) -> bool {
    intervals.windows(2).all(|w| w[0].end() <= w[1].start())
}

/// Returns the complement of a canonical interval set within `bounds`.
///
/// Walks a cursor across `bounds`, emitting the gap before each interval.
/// Intervals that end at or before the cursor are skipped, and the walk
/// stops at `bounds.end`, so the gaps never extend outside the domain even
/// when the input does.
pub fn compute_complement(canonical: &[Interval], bounds: Interval) -> Vec<Interval> {
    debug_assert!(
        is_canonical(canonical),
        "compute_complement called with non-canonical input"
    );
    if bounds.is_empty() {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    let mut cursor = bounds.start();
    for interval in canonical {
        if interval.end() <= cursor {
            continue;
        }
        if interval.start() >= bounds.end() {
            break;
        }
        if interval.start() > cursor {
            gaps.push(Interval::new(cursor, interval.start()));
        }
        cursor = interval.end();
        if cursor >= bounds.end() {
            return gaps;
        }
    }

    if cursor < bounds.end() {
        gaps.push(Interval::new(cursor, bounds.end()));
    }
    gaps
}
