use crate::models::{Achievement, Condition, CouponType, Reward};

/// Custom predicate keys.
pub const FISH_LOVER: &str = "fish_lover";
pub const VEGAN_WEEK: &str = "vegan_week";

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_record",
        name: "First Bite",
        description: "Record your first meal.",
        condition: Condition::TotalDays { days: 1 },
        reward: Reward::Title("Beginner"),
    },
    Achievement {
        id: "streak_3",
        name: "Warming Up",
        description: "Record meals 3 days in a row.",
        condition: Condition::Streak { days: 3 },
        reward: Reward::Title("Habit Seed"),
    },
    Achievement {
        id: "streak_7",
        name: "7-Day Streak",
        description: "Record meals 7 days in a row.",
        condition: Condition::Streak { days: 7 },
        reward: Reward::Title("Week Warrior"),
    },
    Achievement {
        id: "streak_14",
        name: "Fortnight Focus",
        description: "Record meals 14 days in a row.",
        condition: Condition::Streak { days: 14 },
        reward: Reward::Coupon(CouponType::SnackBox),
    },
    Achievement {
        id: "streak_30",
        name: "Iron Habit",
        description: "Record meals 30 days in a row.",
        condition: Condition::Streak { days: 30 },
        reward: Reward::Coupon(CouponType::CheatDay),
    },
    Achievement {
        id: "total_10",
        name: "Ten Days In",
        description: "Record meals on 10 different days.",
        condition: Condition::TotalDays { days: 10 },
        reward: Reward::Title("Regular"),
    },
    Achievement {
        id: "total_30",
        name: "A Month of Meals",
        description: "Record meals on 30 different days.",
        condition: Condition::TotalDays { days: 30 },
        reward: Reward::Title("Dedicated"),
    },
    Achievement {
        id: "total_100",
        name: "Centurion",
        description: "Record meals on 100 different days.",
        condition: Condition::TotalDays { days: 100 },
        reward: Reward::Coupon(CouponType::CheatDay),
    },
    Achievement {
        id: "chicken_10",
        name: "Chicken Champion",
        description: "Collect the Chicken Breast badge 10 times.",
        condition: Condition::BadgeCount {
            badge_id: "chicken_breast",
            count: 10,
        },
        reward: Reward::Title("Protein Pro"),
    },
    Achievement {
        id: "broccoli_10",
        name: "Little Trees",
        description: "Collect the Broccoli badge 10 times.",
        condition: Condition::BadgeCount {
            badge_id: "broccoli",
            count: 10,
        },
        reward: Reward::Title("Green Thumb"),
    },
    Achievement {
        id: "salad_20",
        name: "Salad Days",
        description: "Collect the Salad badge 20 times.",
        condition: Condition::BadgeCount {
            badge_id: "salad",
            count: 20,
        },
        reward: Reward::Coupon(CouponType::SnackBox),
    },
    Achievement {
        id: "lunchbox_5",
        name: "Packed and Ready",
        description: "Bring a homemade lunchbox 5 times.",
        condition: Condition::BadgeCount {
            badge_id: "homemade_lunchbox",
            count: 5,
        },
        reward: Reward::Title("Meal Prepper"),
    },
    Achievement {
        id: FISH_LOVER,
        name: "Fish Lover",
        description: "Collect salmon, mackerel and tuna badges 30 times in total.",
        condition: Condition::Custom { key: FISH_LOVER },
        reward: Reward::Title("Ocean Friend"),
    },
    Achievement {
        id: VEGAN_WEEK,
        name: "Plant Powered",
        description: "Eat only plant-based meals 7 days in a row.",
        condition: Condition::Custom { key: VEGAN_WEEK },
        reward: Reward::Title("Green Warrior"),
    },
];
