pub mod achievement;
pub mod badge;
pub mod coupon;
pub mod stats;

pub use achievement::{Achievement, Condition, Reward, UserAchievement};
pub use badge::{Badge, BadgeCategory, Rarity, UserBadge};
pub use coupon::{Coupon, CouponType};
pub use stats::{ComparisonResult, MiscCounters, Profile, StreakState, Winner};
