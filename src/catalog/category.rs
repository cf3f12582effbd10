//! Category normalization from free-text labels to garment slots

use crate::catalog::item::Item;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// One of the six canonical garment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Headwear
    Hat,
    /// Upper-body garments
    Top,
    /// Lower-body garments
    Bottom,
    /// Footwear
    Shoes,
    /// Layers worn over a top
    Outerwear,
    /// Belts, jewelry, bags and similar
    Accessory,
}

impl Category {
    /// Every slot in display order
    pub const ALL: [Self; 6] = [
        Self::Hat,
        Self::Top,
        Self::Bottom,
        Self::Shoes,
        Self::Outerwear,
        Self::Accessory,
    ];

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hat => "hat",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Outerwear => "outerwear",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static CATEGORY_ALIASES: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    let groups: [(Category, &[&str]); 6] = [
        (
            Category::Bottom,
            &[
                "jeans", "trousers", "shorts", "skirt", "leggings", "pants", "chinos",
            ],
        ),
        (
            Category::Shoes,
            &["sneakers", "boots", "sandals", "heels", "flats", "loafers"],
        ),
        (
            Category::Outerwear,
            &["jacket", "coat", "hoodie", "blazer", "cardigan", "vest"],
        ),
        (Category::Hat, &["cap", "beanie"]),
        (
            Category::Accessory,
            &[
                "belt",
                "watch",
                "jewelry",
                "bag",
                "scarf",
                "sunglasses",
                "necklace",
                "bracelet",
                "earrings",
            ],
        ),
        (
            Category::Top,
            &[
                "shirt", "t-shirt", "tshirt", "blouse", "sweater", "tank", "tank top", "polo",
                "tee",
            ],
        ),
    ];

    let mut aliases = HashMap::new();
    for category in Category::ALL {
        aliases.insert(category.as_str(), category);
    }
    for (category, names) in groups {
        for &name in names {
            aliases.insert(name, category);
        }
    }
    aliases
});

/// Map a free-text label to its garment slot
///
/// Trims and lower-cases the input, then checks canonical names and the alias
/// table. Missing, blank and unknown labels all yield `None`; callers decide
/// how to display those.
pub fn normalize_category(input: Option<&str>) -> Option<Category> {
    let key = input?.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    CATEGORY_ALIASES.get(key.as_str()).copied()
}

/// Capitalized slot name for display
pub fn category_display_name(category: Category) -> String {
    let name = category.as_str();
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Group items into the six display slots
///
/// Every slot is present in the result. Items whose category is missing or
/// unrecognized land in `Accessory`.
pub fn categorize_items(items: &[Item]) -> HashMap<Category, Vec<&Item>> {
    let mut slots: HashMap<Category, Vec<&Item>> =
        Category::ALL.iter().map(|&slot| (slot, Vec::new())).collect();

    for item in items {
        let slot = item.normalized_category().unwrap_or(Category::Accessory);
        slots.entry(slot).or_default().push(item);
    }

    slots
}
