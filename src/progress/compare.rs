use crate::models::{ComparisonResult, Profile, Winner};

/// Head-to-head on current streak alone.
pub fn compare(me: &Profile, friend: &Profile) -> ComparisonResult {
    verdict(
        me,
        friend,
        u64::from(me.current_streak),
        u64::from(friend.current_streak),
    )
}

/// Fixed weighting; achievements count most. Widened to `u64` so any
/// `u32` profile scores without overflow.
pub fn overall_score(p: &Profile) -> u64 {
    u64::from(p.current_streak) * 3
        + u64::from(p.longest_streak) * 2
        + u64::from(p.total_days)
        + u64::from(p.badge_count) * 2
        + u64::from(p.achievement_count) * 5
}

pub fn compare_overall(me: &Profile, friend: &Profile) -> ComparisonResult {
    verdict(me, friend, overall_score(me), overall_score(friend))
}

fn verdict(me: &Profile, friend: &Profile, mine: u64, theirs: u64) -> ComparisonResult {
    let winner = match mine.cmp(&theirs) {
        std::cmp::Ordering::Greater => Winner::Me,
        std::cmp::Ordering::Less => Winner::Friend,
        std::cmp::Ordering::Equal => Winner::Tie,
    };
    ComparisonResult {
        my_profile: me.clone(),
        friend_profile: friend.clone(),
        winner,
        difference: mine.abs_diff(theirs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, current: u32) -> Profile {
        Profile {
            name: name.to_string(),
            current_streak: current,
            ..Default::default()
        }
    }

    #[test]
    fn test_equal_streaks_tie() {
        let r = compare(&profile("me", 5), &profile("friend", 5));
        assert_eq!(r.winner, Winner::Tie);
        assert_eq!(r.difference, 0);
    }

    #[test]
    fn test_streak_winner_and_difference() {
        let r = compare(&profile("me", 9), &profile("friend", 4));
        assert_eq!(r.winner, Winner::Me);
        assert_eq!(r.difference, 5);

        let r = compare(&profile("me", 1), &profile("friend", 4));
        assert_eq!(r.winner, Winner::Friend);
        assert_eq!(r.difference, 3);
    }

    #[test]
    fn test_simple_compare_ignores_other_stats() {
        let mut me = profile("me", 3);
        me.achievement_count = 20;
        let r = compare(&me, &profile("friend", 3));
        assert_eq!(r.winner, Winner::Tie);
    }

    #[test]
    fn test_overall_score_weights() {
        let p = Profile {
            name: "p".into(),
            current_streak: 4,
            longest_streak: 10,
            total_days: 25,
            badge_count: 6,
            achievement_count: 3,
        };
        assert_eq!(overall_score(&p), 12 + 20 + 25 + 12 + 15);
    }

    #[test]
    fn test_overall_compare() {
        let me = Profile {
            name: "me".into(),
            current_streak: 2,
            achievement_count: 2,
            ..Default::default()
        };
        let friend = Profile {
            name: "friend".into(),
            current_streak: 5,
            ..Default::default()
        };
        // 6 + 10 = 16 against 15
        let r = compare_overall(&me, &friend);
        assert_eq!(r.winner, Winner::Me);
        assert_eq!(r.difference, 1);
        assert_eq!(compare(&me, &friend).winner, Winner::Friend);
    }

    #[test]
    fn test_huge_friend_profile_does_not_overflow() {
        let friend: Profile = serde_json::from_str(
            r#"{"name":"f","current_streak":1500000000,"achievement_count":4294967295}"#,
        )
        .unwrap();
        assert_eq!(
            overall_score(&friend),
            1_500_000_000u64 * 3 + 4_294_967_295u64 * 5
        );

        let r = compare_overall(&Profile::default(), &friend);
        assert_eq!(r.winner, Winner::Friend);
        assert_eq!(r.difference, overall_score(&friend));

        let max = Profile {
            current_streak: u32::MAX,
            ..Default::default()
        };
        let r = compare(&max, &Profile::default());
        assert_eq!(r.difference, u64::from(u32::MAX));
    }
}
