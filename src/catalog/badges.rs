use crate::models::{Badge, BadgeCategory, Rarity};

pub static BADGES: &[Badge] = &[
    // Protein
    Badge {
        id: "chicken_breast",
        name: "Chicken Breast",
        emoji: "🍗",
        category: BadgeCategory::Protein,
        rarity: Rarity::Common,
        keywords: &["chicken"],
    },
    Badge {
        id: "egg",
        name: "Egg",
        emoji: "🥚",
        category: BadgeCategory::Protein,
        rarity: Rarity::Common,
        keywords: &["egg"],
    },
    Badge {
        id: "tofu",
        name: "Tofu",
        emoji: "🧈",
        category: BadgeCategory::Protein,
        rarity: Rarity::Common,
        keywords: &["tofu"],
    },
    Badge {
        id: "salmon",
        name: "Salmon",
        emoji: "🍣",
        category: BadgeCategory::Protein,
        rarity: Rarity::Rare,
        keywords: &["salmon"],
    },
    Badge {
        id: "mackerel",
        name: "Mackerel",
        emoji: "🐟",
        category: BadgeCategory::Protein,
        rarity: Rarity::Rare,
        keywords: &["mackerel"],
    },
    Badge {
        id: "tuna",
        name: "Tuna",
        emoji: "🐠",
        category: BadgeCategory::Protein,
        rarity: Rarity::Rare,
        keywords: &["tuna"],
    },
    Badge {
        id: "beef",
        name: "Lean Beef",
        emoji: "🥩",
        category: BadgeCategory::Protein,
        rarity: Rarity::Rare,
        keywords: &["beef", "steak"],
    },
    Badge {
        id: "shrimp",
        name: "Shrimp",
        emoji: "🦐",
        category: BadgeCategory::Protein,
        rarity: Rarity::Epic,
        keywords: &["shrimp", "prawn"],
    },
    // Vegetable
    Badge {
        id: "broccoli",
        name: "Broccoli",
        emoji: "🥦",
        category: BadgeCategory::Vegetable,
        rarity: Rarity::Common,
        keywords: &["broccoli"],
    },
    Badge {
        id: "spinach",
        name: "Spinach",
        emoji: "🥬",
        category: BadgeCategory::Vegetable,
        rarity: Rarity::Common,
        keywords: &["spinach"],
    },
    Badge {
        id: "tomato",
        name: "Tomato",
        emoji: "🍅",
        category: BadgeCategory::Vegetable,
        rarity: Rarity::Common,
        keywords: &["tomato"],
    },
    Badge {
        id: "avocado",
        name: "Avocado",
        emoji: "🥑",
        category: BadgeCategory::Vegetable,
        rarity: Rarity::Rare,
        keywords: &["avocado"],
    },
    // Carb
    Badge {
        id: "brown_rice",
        name: "Brown Rice",
        emoji: "🍚",
        category: BadgeCategory::Carb,
        rarity: Rarity::Common,
        keywords: &["brown rice", "multigrain rice"],
    },
    Badge {
        id: "oatmeal",
        name: "Oatmeal",
        emoji: "🥣",
        category: BadgeCategory::Carb,
        rarity: Rarity::Common,
        keywords: &["oat"],
    },
    Badge {
        id: "sweet_potato",
        name: "Sweet Potato",
        emoji: "🍠",
        category: BadgeCategory::Carb,
        rarity: Rarity::Rare,
        keywords: &["sweet potato"],
    },
    Badge {
        id: "quinoa",
        name: "Quinoa",
        emoji: "🌾",
        category: BadgeCategory::Carb,
        rarity: Rarity::Epic,
        keywords: &["quinoa"],
    },
    // Dish
    Badge {
        id: "salad",
        name: "Salad",
        emoji: "🥗",
        category: BadgeCategory::Dish,
        rarity: Rarity::Common,
        keywords: &["salad"],
    },
    Badge {
        id: "bibimbap",
        name: "Bibimbap",
        emoji: "🍲",
        category: BadgeCategory::Dish,
        rarity: Rarity::Rare,
        keywords: &["bibimbap"],
    },
    Badge {
        id: "poke_bowl",
        name: "Poke Bowl",
        emoji: "🥙",
        category: BadgeCategory::Dish,
        rarity: Rarity::Epic,
        keywords: &["poke"],
    },
    Badge {
        id: "homemade_lunchbox",
        name: "Homemade Lunchbox",
        emoji: "🍱",
        category: BadgeCategory::Dish,
        rarity: Rarity::Legendary,
        keywords: &["lunchbox", "dosirak"],
    },
];
