//! Per-person free-time lookup.

use std::collections::HashMap;

use super::interval_set::IntervalSet;
use crate::timeline::Minutes;
use crate::Id;

/// Maps each person to the set of intervals where they are free.
///
/// The planner's scan queries it minute by minute; each lookup is a binary
/// search in that person's canonical set.
#[derive(Debug, Clone, Default)]
pub struct Availability(HashMap<Id, IntervalSet>);

impl Availability {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// Sets the free intervals for a person, replacing any existing entry.
    pub fn insert(&mut self, id: impl Into<Id>, free: IntervalSet) {
        self.0.insert(id.into(), free);
    }

    /// Returns the free set recorded for a person.
    pub fn get(&self, id: &str) -> Option<&IntervalSet> {
        self.0.get(id)
    }

    /// Returns the ids that have free intervals recorded.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the given person is free at `minute`.
    ///
    /// Unknown ids are never free.
    pub fn is_free_at(&self, id: &str, minute: Minutes) -> bool {
        self.0.get(id).is_some_and(|set| set.contains(minute))
    }

    /// Returns true if every recorded person is free at `minute`.
    ///
    /// Vacuously true when nobody is recorded.
    pub fn all_free_at(&self, minute: Minutes) -> bool {
        self.0.values().all(|set| set.contains(minute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::free_time::Interval;

    fn set(intervals: Vec<(Minutes, Minutes)>) -> IntervalSet {
        intervals
            .into_iter()
            .map(|(s, e)| Interval::new(s, e))
            .collect()
    }

    #[test]
    fn empty_availability_is_vacuously_free() {
        let availability = Availability::new();
        assert!(availability.is_empty());
        assert!(availability.all_free_at(0));
        assert!(availability.all_free_at(4000));
    }

    #[test]
    fn insert_and_query_single_person() {
        let mut availability = Availability::new();
        availability.insert("linus", set(vec![(0, 100), (200, 300)]));
        assert_eq!(availability.len(), 1);
        assert!(availability.is_free_at("linus", 50));
        assert!(!availability.is_free_at("linus", 150));
        assert!(availability.get("linus").is_some());
    }

    #[test]
    fn unknown_person_is_never_free() {
        let mut availability = Availability::new();
        availability.insert("linus", set(vec![(0, 100)]));
        assert!(!availability.is_free_at("basher", 50));
    }

    #[test]
    fn all_free_requires_everyone() {
        let mut availability = Availability::new();
        availability.insert("linus", set(vec![(0, 100)]));
        availability.insert("rusty", set(vec![(50, 200)]));
        assert!(availability.all_free_at(60));
        assert!(!availability.all_free_at(20));
        assert!(!availability.all_free_at(150));
    }

    #[test]
    fn person_with_no_free_time_blocks_every_minute() {
        let mut availability = Availability::new();
        availability.insert("linus", IntervalSet::new());
        assert!(!availability.all_free_at(0));
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut availability = Availability::new();
        availability.insert("linus", set(vec![(0, 100)]));
        availability.insert("linus", set(vec![(500, 600)]));
        assert_eq!(availability.len(), 1);
        assert!(!availability.is_free_at("linus", 50));
        assert!(availability.is_free_at("linus", 550));
    }

    #[test]
    fn ids_lists_recorded_people() {
        let mut availability = Availability::new();
        availability.insert("linus", IntervalSet::new());
        availability.insert("rusty", IntervalSet::new());
        let mut ids: Vec<_> = availability.ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["linus", "rusty"]);
    }
}
