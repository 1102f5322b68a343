use serde::{Deserialize, Serialize};

use crate::progress::DayKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub last_record_date: Option<DayKey>,
    /// Monday = 0 .. Sunday = 6 of the current week
    pub weekly_status: [bool; 7],
}

impl StreakState {
    pub fn days_this_week(&self) -> u32 {
        self.weekly_status.iter().filter(|done| **done).count() as u32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiscCounters {
    #[serde(default)]
    pub meals_logged: u32,
    #[serde(default)]
    pub temptations_resisted: u32,
}

/// The derived numbers two users are compared on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub badge_count: u32,
    #[serde(default)]
    pub achievement_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Me,
    Friend,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub my_profile: Profile,
    pub friend_profile: Profile,
    pub winner: Winner,
    pub difference: u64,
}
