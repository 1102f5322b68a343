use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::StreakState;
use crate::progress::{compute_streak, DayKey};

/// Recorded days plus the streak state derived from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakStore {
    #[serde(default)]
    pub record_dates: BTreeSet<DayKey>,
    #[serde(default)]
    pub state: StreakState,
}

impl StreakStore {
    /// Mark `today` as recorded. Returns `false` if it already was.
    pub fn record(&mut self, today: DayKey) -> bool {
        if self.is_recorded(today) {
            log::debug!("{} already recorded", today);
            return false;
        }
        self.record_dates.insert(today);
        self.state = compute_streak(&self.record_dates, today);
        log::info!(
            "recorded {} (streak {}, longest {})",
            today,
            self.state.current_streak,
            self.state.longest_streak
        );
        true
    }

    /// Rebuild the state from history so a stale snapshot reflects `today`.
    pub fn refresh(&mut self, today: DayKey) {
        self.state = compute_streak(&self.record_dates, today);
    }

    pub fn is_recorded(&self, day: DayKey) -> bool {
        self.record_dates.contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_record_twice_same_day_is_noop() {
        let today = key("2024-05-08");
        let mut store = StreakStore::default();
        assert!(store.record(today));
        let after_first = store.clone();
        assert!(!store.record(today));
        assert_eq!(store, after_first);
        assert_eq!(store.state.total_days, 1);
        assert_eq!(store.state.current_streak, 1);
    }

    #[test]
    fn test_consecutive_records_build_streak() {
        let mut store = StreakStore::default();
        let start = key("2024-05-01");
        for i in 0..5 {
            store.record(start.add_days(i));
        }
        assert_eq!(store.state.current_streak, 5);
        assert_eq!(store.state.longest_streak, 5);
        assert!(store.is_recorded(key("2024-05-03")));
    }

    #[test]
    fn test_refresh_breaks_stale_streak() {
        let mut store = StreakStore::default();
        store.record(key("2024-05-01"));
        store.record(key("2024-05-02"));
        assert_eq!(store.state.current_streak, 2);

        store.refresh(key("2024-05-10"));
        assert_eq!(store.state.current_streak, 0);
        assert_eq!(store.state.longest_streak, 2);
        assert_eq!(store.state.weekly_status, [false; 7]);
    }
}
