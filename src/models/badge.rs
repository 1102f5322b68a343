use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Protein,
    Vegetable,
    Carb,
    Dish,
}

impl BadgeCategory {
    pub fn all() -> [BadgeCategory; 4] {
        [
            BadgeCategory::Protein,
            BadgeCategory::Vegetable,
            BadgeCategory::Carb,
            BadgeCategory::Dish,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BadgeCategory::Protein => "Protein",
            BadgeCategory::Vegetable => "Vegetables",
            BadgeCategory::Carb => "Carbs",
            BadgeCategory::Dish => "Dishes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub category: BadgeCategory,
    pub rarity: Rarity,
    /// Lowercase fragments matched against a meal's food tags
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBadge {
    pub badge_id: String,
    pub count: u32,
    pub first_acquired: DateTime<Utc>,
    pub last_acquired: DateTime<Utc>,
}
