//! Pure calculations behind every number the app shows: day keys, streaks,
//! coupon eligibility, badge matching, achievement progress and comparisons.

pub mod achievement;
pub mod badge;
pub mod compare;
pub mod coupon;
pub mod date_key;
pub mod streak;

pub use achievement::{AchievementEngine, Counters};
pub use badge::match_badges;
pub use compare::{compare, compare_overall, overall_score};
pub use coupon::{days_until_eligible, Thresholds};
pub use date_key::{day_key_of, week_start, DayKey};
pub use streak::compute_streak;
