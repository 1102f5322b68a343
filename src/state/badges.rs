use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::UserBadge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeCollection {
    #[serde(default)]
    pub badges: Vec<UserBadge>,
}

impl BadgeCollection {
    /// Create the badge with count 1, or bump its count. Returns the new count.
    pub fn award(&mut self, badge_id: &str, now: DateTime<Utc>) -> u32 {
        if let Some(existing) = self.badges.iter_mut().find(|b| b.badge_id == badge_id) {
            existing.count += 1;
            existing.last_acquired = now;
            log::debug!("badge {} now x{}", badge_id, existing.count);
            return existing.count;
        }
        self.badges.push(UserBadge {
            badge_id: badge_id.to_string(),
            count: 1,
            first_acquired: now,
            last_acquired: now,
        });
        log::info!("new badge {}", badge_id);
        1
    }

    pub fn get(&self, badge_id: &str) -> Option<&UserBadge> {
        self.badges.iter().find(|b| b.badge_id == badge_id)
    }

    pub fn count(&self, badge_id: &str) -> u32 {
        self.get(badge_id).map(|b| b.count).unwrap_or(0)
    }

    /// Distinct badges collected.
    pub fn distinct(&self) -> u32 {
        self.badges.len() as u32
    }

    pub fn counts(&self) -> BTreeMap<String, u32> {
        self.badges
            .iter()
            .map(|b| (b.badge_id.clone(), b.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_award_creates_then_increments() {
        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap();
        let mut c = BadgeCollection::default();

        assert_eq!(c.award("salmon", t1), 1);
        assert_eq!(c.award("salmon", t2), 2);
        assert_eq!(c.award("tofu", t2), 1);

        let salmon = c.get("salmon").unwrap();
        assert_eq!(salmon.first_acquired, t1);
        assert_eq!(salmon.last_acquired, t2);
        assert_eq!(c.distinct(), 2);
        assert_eq!(c.count("beef"), 0);
        assert_eq!(c.counts().get("salmon"), Some(&2));
    }
}
