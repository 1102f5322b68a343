use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::UserAchievement;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementLog {
    #[serde(default)]
    pub unlocked: Vec<UserAchievement>,
}

impl AchievementLog {
    /// Record the unlock once. Returns `false` if it was already unlocked.
    pub fn unlock(&mut self, achievement_id: &str, now: DateTime<Utc>) -> bool {
        if self.is_unlocked(achievement_id) {
            return false;
        }
        self.unlocked.push(UserAchievement {
            achievement_id: achievement_id.to_string(),
            unlocked_at: now,
            is_new: true,
        });
        log::info!("achievement unlocked: {}", achievement_id);
        true
    }

    pub fn is_unlocked(&self, achievement_id: &str) -> bool {
        self.unlocked.iter().any(|u| u.achievement_id == achievement_id)
    }

    pub fn unlocked_ids(&self) -> HashSet<String> {
        self.unlocked
            .iter()
            .map(|u| u.achievement_id.clone())
            .collect()
    }

    pub fn new_ones(&self) -> impl Iterator<Item = &UserAchievement> {
        self.unlocked.iter().filter(|u| u.is_new)
    }

    /// Clear every "new" flag. Returns how many were cleared.
    pub fn acknowledge_all(&mut self) -> usize {
        let mut cleared = 0;
        for u in self.unlocked.iter_mut().filter(|u| u.is_new) {
            u.is_new = false;
            cleared += 1;
        }
        cleared
    }

    pub fn count(&self) -> u32 {
        self.unlocked.len() as u32
    }
}
