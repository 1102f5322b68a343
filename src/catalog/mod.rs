//! Compiled-in reference data: the badge and achievement catalogs.
//!
//! Catalog order is meaningful. Recommendation ties resolve to whichever
//! achievement is listed first, and listings render in this order.

mod achievements;
mod badges;

pub use achievements::{ACHIEVEMENTS, FISH_LOVER};
pub use badges::BADGES;

use crate::models::{Achievement, Badge};

pub fn find_badge(id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == id)
}

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let badge_ids: HashSet<_> = BADGES.iter().map(|b| b.id).collect();
        assert_eq!(badge_ids.len(), BADGES.len());
        let achievement_ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(achievement_ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_badge_conditions_reference_real_badges() {
        for a in ACHIEVEMENTS {
            if let Condition::BadgeCount { badge_id, .. } = a.condition {
                assert!(find_badge(badge_id).is_some(), "{} -> {}", a.id, badge_id);
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for b in BADGES {
            assert!(!b.keywords.is_empty(), "{} has no keywords", b.id);
            for k in b.keywords {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }
}
