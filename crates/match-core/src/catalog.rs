//! Item Catalog
//!
//! Fixed per-category item lists the levels draw their rows from.

use serde::{Deserialize, Serialize};

/// A pictured item on the shelf
///
/// Identity and equality are by catalog `key`.
#[derive(Debug, Clone, Copy, Eq, Serialize)]
pub struct Item {
    /// Asset key, unique across all catalogs
    pub key: &'static str,
    /// Display name
    pub label: &'static str,
    /// Card color (hex)
    pub color: &'static str,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

const fn item(key: &'static str, label: &'static str, color: &'static str) -> Item {
    Item { key, label, color }
}

const CANS: &[Item] = &[
    item("coke", "Coke", "#e41e2b"),
    item("fanta_orange", "Fanta Orange", "#ff8a00"),
    item("fanta_purple", "Fanta Grape", "#7b2d8e"),
    item("mountaindew", "Mountain Dew", "#7ac143"),
    item("pepsi", "Pepsi", "#004b93"),
    item("redbull", "Red Bull", "#c0c6d0"),
    item("sevenup", "7UP", "#00a651"),
    item("sprite", "Sprite", "#00af66"),
];

const BOTTLES: &[Item] = &[
    item("aquafinabottle", "Aquafina", "#5bc2e7"),
    item("beerbottle", "Beer", "#8b5a2b"),
    item("cokebottle", "Coke Bottle", "#b5121b"),
    item("fantabottle_orange", "Fanta Bottle", "#f7941d"),
    item("greenbottle", "Green Bottle", "#2e8b57"),
    item("orangebottle", "Orange Bottle", "#ffa500"),
    item("redbottle", "Red Bottle", "#d62828"),
];

const CEREAL_BOXES: &[Item] = &[
    item("cheeriosbox", "Cheerios", "#f4c430"),
    item("chipsahoybox", "Chips Ahoy!", "#1c4fa1"),
    item("frootloopsbox", "Froot Loops", "#e63946"),
    item("frostedflakesbox", "Frosted Flakes", "#1d70b8"),
    item("milobox", "Milo", "#2d6a2e"),
    item("orangebox", "Orange Box", "#f77f00"),
    item("redbox", "Red Box", "#c1121f"),
    item("ricebox", "Rice Krispies", "#48cae4"),
];

const CUP_NOODLES: &[Item] = &[
    item("cupchick", "Chicken", "#f6bd60"),
    item("cupcurry", "Curry", "#e9c46a"),
    item("cupkyushu", "Kyushu", "#6d597a"),
    item("cupramen", "Ramen", "#e76f51"),
    item("cupsea", "Seafood", "#2a9d8f"),
    item("cuptomyam", "Tom Yam", "#d00000"),
    item("cupveg", "Vegetable", "#80b918"),
    item("cupwhite", "White", "#dee2e6"),
];

/// Item category a level draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cans,
    Bottles,
    CerealBoxes,
    CupNoodles,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Cans,
        Category::Bottles,
        Category::CerealBoxes,
        Category::CupNoodles,
    ];

    /// Plural display name, e.g. "cereal boxes"
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cans => "cans",
            Category::Bottles => "bottles",
            Category::CerealBoxes => "cereal boxes",
            Category::CupNoodles => "cup noodles",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Cans => "🥫",
            Category::Bottles => "🍾",
            Category::CerealBoxes => "📦",
            Category::CupNoodles => "🍜",
        }
    }

    pub fn items(&self) -> &'static [Item] {
        match self {
            Category::Cans => CANS,
            Category::Bottles => BOTTLES,
            Category::CerealBoxes => CEREAL_BOXES,
            Category::CupNoodles => CUP_NOODLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Category::Cans.items().len(), 8);
        assert_eq!(Category::Bottles.items().len(), 7);
        assert_eq!(Category::CerealBoxes.items().len(), 8);
        assert_eq!(Category::CupNoodles.items().len(), 8);
    }

    #[test]
    fn test_keys_unique_across_catalogs() {
        let mut seen = HashSet::new();
        for category in Category::ALL {
            for item in category.items() {
                assert!(seen.insert(item.key), "duplicate key {}", item.key);
            }
        }
    }

    #[test]
    fn test_item_equality_is_by_key() {
        let a = Item { key: "coke", label: "Coke", color: "#000" };
        let b = Item { key: "coke", label: "Other", color: "#fff" };
        assert_eq!(a, b);
        assert_ne!(a, Category::Cans.items()[1]);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::CerealBoxes).unwrap();
        assert_eq!(json, "\"cereal_boxes\"");
    }
}
