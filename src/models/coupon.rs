use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponType {
    CheatDay,
    SnackBox,
}

impl CouponType {
    pub fn all() -> [CouponType; 2] {
        [CouponType::SnackBox, CouponType::CheatDay]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CouponType::CheatDay => "cheat_day",
            CouponType::SnackBox => "snack_box",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CouponType::CheatDay => "Cheat Day",
            CouponType::SnackBox => "Snack Box",
        }
    }

    /// Consecutive days needed before one is issued.
    pub fn default_threshold(&self) -> u32 {
        match self {
            CouponType::SnackBox => 3,
            CouponType::CheatDay => 7,
        }
    }
}

impl std::fmt::Display for CouponType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: u32,
    pub coupon_type: CouponType,
    pub issued_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub is_used: bool,
    pub what_ate: Option<String>,
}
