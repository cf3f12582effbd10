//! Temperature buckets and keyword heuristics for weather suitability
//!
//! Suitability is a conservative exclusion filter: an item is kept unless its
//! name, tags or category mark it as wrong for the bucket. Recommendation is
//! the positive counterpart used only as a soft preference.

use crate::catalog::category::Category;
use crate::catalog::item::Item;
use crate::io::error::WardrobeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse temperature band, ordered from warmest to coldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    /// 30 °C and above
    Hot,
    /// 20 °C up to 30 °C
    Warm,
    /// 10 °C up to 20 °C
    Mild,
    /// 0 °C up to 10 °C
    Cool,
    /// −10 °C up to 0 °C
    Cold,
    /// Below −10 °C
    Freezing,
}

impl WeatherCondition {
    /// Every bucket from warmest to coldest
    pub const ALL: [Self; 6] = [
        Self::Hot,
        Self::Warm,
        Self::Mild,
        Self::Cool,
        Self::Cold,
        Self::Freezing,
    ];

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Mild => "mild",
            Self::Cool => "cool",
            Self::Cold => "cold",
            Self::Freezing => "freezing",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str() == key)
            .ok_or_else(|| WardrobeError::UnknownWeather {
                value: s.to_string(),
            })
    }
}

// Exclusion keywords per bucket
const HOT_EXCLUDED: &[&str] = &[
    "jacket",
    "coat",
    "sweater",
    "hoodie",
    "long-sleeve",
    "long sleeve",
    "wool",
    "fleece",
    "long pants",
    "jeans",
    "trousers",
];
const WARM_EXCLUDED: &[&str] = &["heavy", "winter", "wool", "parka", "down"];
const WARM_EXCLUDED_OUTERWEAR: &[&str] = &["puffer", "overcoat", "parka"];
const COLD_EXCLUDED: &[&str] = &["shorts", "tank", "sleeveless", "sandal"];
const SANDAL_SHOES: &[&str] = &["sandal", "flip-flop", "flip flop", "slide"];
const FREEZING_EXCLUDED: &[&str] = &["shorts", "tank", "sleeveless", "sandal", "light"];
const FREEZING_SHOES: &[&str] = &["boot", "winter"];

// Affinity keywords used for recommendations
const HOT_AFFINITY: &[&str] = &[
    "summer", "linen", "shorts", "tank", "sandal", "breathable", "tee", "t-shirt", "skirt",
];
const WARM_AFFINITY: &[&str] = &[
    "summer", "light", "linen", "cotton", "tee", "t-shirt", "polo", "sneaker", "shorts",
];
const MILD_AFFINITY: &[&str] = &[
    "spring", "fall", "autumn", "light jacket", "cardigan", "denim", "jeans", "layer",
];
const COOL_AFFINITY: &[&str] = &[
    "jacket", "sweater", "hoodie", "cardigan", "long-sleeve", "long sleeve", "boot", "fall",
];
const COLD_AFFINITY: &[&str] = &[
    "coat", "sweater", "wool", "fleece", "boot", "winter", "scarf", "beanie", "thermal",
];
const FREEZING_AFFINITY: &[&str] = &[
    "parka", "down", "thermal", "wool", "winter", "boot", "beanie", "gloves", "scarf", "heavy",
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Map a Celsius temperature to its bucket
///
/// Bands are half-open and each boundary belongs to the warmer bucket.
pub fn map_temp_to_condition(celsius: f64) -> WeatherCondition {
    if celsius >= 30.0 {
        WeatherCondition::Hot
    } else if celsius >= 20.0 {
        WeatherCondition::Warm
    } else if celsius >= 10.0 {
        WeatherCondition::Mild
    } else if celsius >= 0.0 {
        WeatherCondition::Cool
    } else if celsius >= -10.0 {
        WeatherCondition::Cold
    } else {
        WeatherCondition::Freezing
    }
}

/// Alias of [`map_temp_to_condition`] kept for callers that think in temperature categories
pub fn temp_category(celsius: f64) -> WeatherCondition {
    map_temp_to_condition(celsius)
}

/// Whether an item may be worn in the given weather
///
/// Matching is substring-based over the lower-cased name and tags, so a
/// keyword anywhere in the text counts regardless of category.
pub fn is_item_suitable_for_weather(item: &Item, condition: WeatherCondition) -> bool {
    let text = item.search_text();
    let category = item.normalized_category();

    match condition {
        WeatherCondition::Hot => {
            category != Some(Category::Outerwear) && !contains_any(&text, HOT_EXCLUDED)
        }
        WeatherCondition::Warm => {
            let heavy_outerwear = category == Some(Category::Outerwear)
                && contains_any(&text, WARM_EXCLUDED_OUTERWEAR);
            !heavy_outerwear && !contains_any(&text, WARM_EXCLUDED)
        }
        WeatherCondition::Mild => true,
        WeatherCondition::Cool => !(category == Some(Category::Bottom) && item.has_tag("shorts")),
        WeatherCondition::Cold => {
            let sandal_shoes =
                category == Some(Category::Shoes) && contains_any(&text, SANDAL_SHOES);
            !sandal_shoes && !contains_any(&text, COLD_EXCLUDED)
        }
        WeatherCondition::Freezing => {
            if contains_any(&text, FREEZING_EXCLUDED) {
                return false;
            }
            category != Some(Category::Shoes) || contains_any(&text, FREEZING_SHOES)
        }
    }
}

/// Whether an item is a good pick for the weather, not merely acceptable
pub fn is_item_recommended_for_weather(item: &Item, condition: WeatherCondition) -> bool {
    if !is_item_suitable_for_weather(item, condition) {
        return false;
    }

    let affinity = match condition {
        WeatherCondition::Hot => HOT_AFFINITY,
        WeatherCondition::Warm => WARM_AFFINITY,
        WeatherCondition::Mild => MILD_AFFINITY,
        WeatherCondition::Cool => COOL_AFFINITY,
        WeatherCondition::Cold => COLD_AFFINITY,
        WeatherCondition::Freezing => FREEZING_AFFINITY,
    };

    contains_any(&item.search_text(), affinity)
}

/// Items recommended for the weather, in input order
pub fn get_recommended_items(items: &[Item], condition: WeatherCondition) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| is_item_recommended_for_weather(item, condition))
        .collect()
}
