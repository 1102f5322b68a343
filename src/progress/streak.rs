use std::collections::BTreeSet;

use crate::models::StreakState;
use crate::progress::date_key::{days_between, week_days, DayKey};

/// Derive the full streak state from the set of recorded days, as of `today`.
///
/// The current streak survives a single missed calendar day: it stays alive
/// while the latest record is today or yesterday, and counts backward from
/// that latest record.
pub fn compute_streak(days: &BTreeSet<DayKey>, today: DayKey) -> StreakState {
    let Some(&last) = days.last() else {
        return StreakState::default();
    };

    StreakState {
        current_streak: current_streak(days, last, today),
        longest_streak: longest_streak(days),
        total_days: days.len() as u32,
        last_record_date: Some(last),
        weekly_status: weekly_status(days, today),
    }
}

fn current_streak(days: &BTreeSet<DayKey>, last: DayKey, today: DayKey) -> u32 {
    let gap = days_between(last, today);
    if !(0..=1).contains(&gap) {
        return 0;
    }

    let mut count = 0u32;
    let mut check = last;
    while days.contains(&check) {
        count += 1;
        check = check.pred();
    }
    count
}

fn longest_streak(days: &BTreeSet<DayKey>) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<DayKey> = None;

    for &day in days {
        run = match prev {
            Some(p) if days_between(p, day) == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }
    best
}

/// Monday..Sunday of `today`'s week, true where a day was recorded.
pub fn weekly_status(days: &BTreeSet<DayKey>, today: DayKey) -> [bool; 7] {
    week_days(today).map(|d| days.contains(&d))
}
