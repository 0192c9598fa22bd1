//! Show classification, counter selection and detail partitioning.
//!
//! A show is classified exactly once, when it is booked. The resulting
//! `upcoming` flag is persisted and every later read (detail pages, the
//! upcoming-shows listing) trusts the stored flag instead of comparing
//! against the clock again.

use serde::Serialize;

use crate::types::ShowTime;

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Returns `true` when a show starting at `start_time` is upcoming
/// relative to `now`.
///
/// The comparison is strict: a show starting exactly at `now` is past.
pub fn classify(start_time: ShowTime, now: ShowTime) -> bool {
    start_time > now
}

// ---------------------------------------------------------------------------
// Counter selection
// ---------------------------------------------------------------------------

/// The denormalized counter a newly booked show increments on both its
/// venue and its artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCounter {
    Upcoming,
    Past,
}

impl ShowCounter {
    /// Pick the counter matching a show's stored `upcoming` flag.
    pub fn for_show(upcoming: bool) -> Self {
        if upcoming {
            Self::Upcoming
        } else {
            Self::Past
        }
    }

    /// Column name on both the `venues` and `artists` tables.
    pub fn column(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming_shows_count",
            Self::Past => "past_shows_count",
        }
    }
}

// ---------------------------------------------------------------------------
// Detail partitioning
// ---------------------------------------------------------------------------

/// Shows of a single venue or artist split by their stored `upcoming` flag.
///
/// The counts are computed from the lists themselves and can differ from
/// the cached counters on the owning entity.
#[derive(Debug, Clone, Serialize)]
pub struct ShowTimeline<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T> ShowTimeline<T> {
    /// Partition `shows` into past and upcoming using `is_upcoming`.
    ///
    /// Every input ends up in exactly one list and input order is kept
    /// within each list.
    pub fn partition<I, F>(shows: I, is_upcoming: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> bool,
    {
        let (upcoming_shows, past_shows): (Vec<T>, Vec<T>) =
            shows.into_iter().partition(|show| is_upcoming(show));

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }

    pub fn total(&self) -> usize {
        self.past_shows_count + self.upcoming_shows_count
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;

    fn at(hour: u32) -> ShowTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    // -- classify ------------------------------------------------------------

    #[test]
    fn future_start_is_upcoming() {
        assert!(classify(at(21), at(20)));
    }

    #[test]
    fn past_start_is_not_upcoming() {
        assert!(!classify(at(19), at(20)));
    }

    #[test]
    fn start_equal_to_now_is_past() {
        assert!(!classify(at(20), at(20)));
    }

    #[test]
    fn one_second_ahead_is_upcoming() {
        let now = at(20);
        assert!(classify(now + Duration::seconds(1), now));
        assert!(!classify(now - Duration::seconds(1), now));
    }

    #[test]
    fn classify_matches_strict_comparison_over_a_range() {
        let now = at(12);
        for offset in -48..=48 {
            let start = now + Duration::minutes(offset * 15);
            assert_eq!(classify(start, now), start > now, "offset {offset}");
        }
    }

    // -- ShowCounter ---------------------------------------------------------

    #[test]
    fn counter_follows_upcoming_flag() {
        assert_eq!(ShowCounter::for_show(true), ShowCounter::Upcoming);
        assert_eq!(ShowCounter::for_show(false), ShowCounter::Past);
    }

    #[test]
    fn counter_columns() {
        assert_eq!(ShowCounter::Upcoming.column(), "upcoming_shows_count");
        assert_eq!(ShowCounter::Past.column(), "past_shows_count");
    }

    // -- ShowTimeline --------------------------------------------------------

    #[test]
    fn partition_puts_each_show_in_one_list() {
        let shows = vec![(1, true), (2, false), (3, true), (4, false), (5, false)];
        let timeline = ShowTimeline::partition(shows, |(_, upcoming)| *upcoming);

        let upcoming: Vec<i32> = timeline.upcoming_shows.iter().map(|s| s.0).collect();
        let past: Vec<i32> = timeline.past_shows.iter().map(|s| s.0).collect();

        assert_eq!(upcoming, vec![1, 3]);
        assert_eq!(past, vec![2, 4, 5]);
        assert_eq!(timeline.upcoming_shows_count, 2);
        assert_eq!(timeline.past_shows_count, 3);
        assert_eq!(timeline.total(), 5);
    }

    #[test]
    fn partition_of_nothing_is_empty() {
        let timeline = ShowTimeline::partition(Vec::<(i32, bool)>::new(), |s| s.1);
        assert!(timeline.past_shows.is_empty());
        assert!(timeline.upcoming_shows.is_empty());
        assert_eq!(timeline.total(), 0);
    }

    #[test]
    fn timeline_serializes_with_counts() {
        let timeline = ShowTimeline::partition(vec![("a", true)], |s| s.1);
        let json = serde_json::to_value(&timeline).unwrap();
        assert_eq!(json["upcoming_shows_count"], 1);
        assert_eq!(json["past_shows_count"], 0);
        assert_eq!(json["past_shows"].as_array().unwrap().len(), 0);
    }
}
