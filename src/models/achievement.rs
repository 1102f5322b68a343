use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CouponType;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    BadgeCount { badge_id: &'static str, count: u32 },
    Streak { days: u32 },
    TotalDays { days: u32 },
    /// Evaluated by whatever predicate is registered under `key`
    Custom { key: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reward {
    Title(&'static str),
    Coupon(CouponType),
}

impl Reward {
    pub fn describe(&self) -> String {
        match self {
            Reward::Title(title) => format!("title \"{}\"", title),
            Reward::Coupon(ty) => format!("{} coupon", ty.display_name()),
        }
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: Condition,
    pub reward: Reward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    pub achievement_id: String,
    pub unlocked_at: DateTime<Utc>,
    pub is_new: bool,
}
