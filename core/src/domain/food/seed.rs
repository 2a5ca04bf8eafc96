use crate::domain::food::{entities::OxalateLevel, value_objects::SeedFood};

struct SeedRow {
    name: &'static str,
    category: &'static str,
    content: u32,
    level: OxalateLevel,
    serving_size: Option<&'static str>,
    tip: &'static str,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        name: "Spinach",
        category: "Vegetables",
        content: 970,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Try kale or bok choy for a low-oxalate leafy green",
    },
    SeedRow {
        name: "Rhubarb",
        category: "Vegetables",
        content: 860,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Use strawberries in pies and compotes instead",
    },
    SeedRow {
        name: "Swiss Chard",
        category: "Vegetables",
        content: 645,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Swap for romaine or green cabbage",
    },
    SeedRow {
        name: "Beet Greens",
        category: "Vegetables",
        content: 610,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Boiling and discarding the water lowers soluble oxalates",
    },
    SeedRow {
        name: "Almonds",
        category: "Nuts",
        content: 469,
        level: OxalateLevel::High,
        serving_size: Some("100g (about 80 nuts)"),
        tip: "Macadamia nuts or pumpkin seeds are lower in oxalates",
    },
    SeedRow {
        name: "Cashews",
        category: "Nuts",
        content: 262,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Choose pecans or macadamias for snacking",
    },
    SeedRow {
        name: "Buckwheat",
        category: "Grains",
        content: 269,
        level: OxalateLevel::High,
        serving_size: Some("100g (dry)"),
        tip: "White rice or oats are gentler options",
    },
    SeedRow {
        name: "Okra",
        category: "Vegetables",
        content: 146,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Zucchini works well in stews and gumbo",
    },
    SeedRow {
        name: "Beets",
        category: "Vegetables",
        content: 152,
        level: OxalateLevel::High,
        serving_size: None,
        tip: "Roasted carrots give a similar sweetness",
    },
    SeedRow {
        name: "Sweet Potato",
        category: "Vegetables",
        content: 28,
        level: OxalateLevel::Medium,
        serving_size: Some("100g (baked)"),
        tip: "Pair with calcium-rich foods to reduce absorption",
    },
    SeedRow {
        name: "Raspberries",
        category: "Fruits",
        content: 48,
        level: OxalateLevel::Medium,
        serving_size: None,
        tip: "Blueberries are a lower-oxalate berry",
    },
    SeedRow {
        name: "Carrots",
        category: "Vegetables",
        content: 15,
        level: OxalateLevel::Medium,
        serving_size: None,
        tip: "Cooking in plenty of water lowers the oxalate load",
    },
    SeedRow {
        name: "Avocado",
        category: "Fruits",
        content: 19,
        level: OxalateLevel::Medium,
        serving_size: None,
        tip: "Keep to half a fruit per serving",
    },
    SeedRow {
        name: "Split Peas",
        category: "Legumes",
        content: 5,
        level: OxalateLevel::Low,
        serving_size: Some("100g (cooked)"),
        tip: "Good source of plant protein and fibre",
    },
    SeedRow {
        name: "Asparagus",
        category: "Vegetables",
        content: 6,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "Rich in folate and vitamin K",
    },
    SeedRow {
        name: "Brussels Sprouts",
        category: "Vegetables",
        content: 6,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "High in vitamin C and fibre",
    },
    SeedRow {
        name: "Spaghetti Squash",
        category: "Vegetables",
        content: 3,
        level: OxalateLevel::Low,
        serving_size: Some("100g (cooked)"),
        tip: "A light, low-calorie pasta substitute",
    },
    SeedRow {
        name: "Kale",
        category: "Vegetables",
        content: 2,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "Calcium-rich green with very little oxalate",
    },
    SeedRow {
        name: "Broccoli",
        category: "Vegetables",
        content: 2,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "Good source of vitamin C and sulforaphane",
    },
    SeedRow {
        name: "Cauliflower",
        category: "Vegetables",
        content: 1,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "Versatile rice and mash replacement",
    },
    SeedRow {
        name: "Bok Choy",
        category: "Vegetables",
        content: 1,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "Provides calcium with high bioavailability",
    },
    SeedRow {
        name: "Blueberries",
        category: "Fruits",
        content: 4,
        level: OxalateLevel::Low,
        serving_size: None,
        tip: "Packed with antioxidants",
    },
    SeedRow {
        name: "Bananas",
        category: "Fruits",
        content: 3,
        level: OxalateLevel::Low,
        serving_size: Some("1 medium fruit"),
        tip: "Good source of potassium",
    },
    SeedRow {
        name: "White Rice",
        category: "Grains",
        content: 2,
        level: OxalateLevel::Low,
        serving_size: Some("100g (cooked)"),
        tip: "Easy to digest staple grain",
    },
    SeedRow {
        name: "Eggs",
        category: "Protein",
        content: 0,
        level: OxalateLevel::Low,
        serving_size: Some("2 large eggs"),
        tip: "Complete protein with no oxalates",
    },
];

/// The foods loaded into the store at startup.
pub fn initial_foods() -> Vec<SeedFood> {
    SEED_ROWS
        .iter()
        .map(|row| SeedFood {
            name: row.name.to_string(),
            category: row.category.to_string(),
            oxalate_content: row.content,
            oxalate_level: row.level,
            serving_size: row.serving_size.map(str::to_string),
            alternative_tip: Some(row.tip.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_names_are_distinct() {
        let foods = initial_foods();
        let names: HashSet<String> = foods.iter().map(|f| f.name.to_lowercase()).collect();
        assert_eq!(names.len(), foods.len());
    }

    #[test]
    fn test_seed_covers_every_level() {
        let levels: HashSet<OxalateLevel> =
            initial_foods().iter().map(|f| f.oxalate_level).collect();
        assert_eq!(levels.len(), 3);
    }
}
