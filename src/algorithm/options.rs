//! Option set steering a single outfit generation

use crate::io::configuration::{
    DEFAULT_COLOR_MATCH_THRESHOLD, DEFAULT_MAX_ITEMS, DEFAULT_MIN_ITEMS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::matching::weather::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Constraints and preferences for [`crate::algorithm::executor::OutfitGenerator`]
///
/// A plain value: build one with struct update syntax over
/// [`RandomizeOptions::default`] or [`RandomizeOptions::smart`]. Out-of-range
/// values are clamped by the engine rather than rejected.
// Each flag toggles an independent generation stage
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomizeOptions {
    /// Lower bound on outfit size
    pub min_items: usize,
    /// Upper bound on outfit size
    pub max_items: usize,
    /// Forbid two items from the same category
    pub avoid_same_category: bool,
    /// Raw category labels an item must carry (categoryless items pass)
    pub required_categories: Vec<String>,
    /// Raw category labels that disqualify an item
    pub excluded_categories: Vec<String>,
    /// Tags that must all be present
    pub required_tags: Vec<String>,
    /// Tags of which none may be present
    pub excluded_tags: Vec<String>,
    /// Resolved weather bucket, consulted when weather rules are on
    pub weather_condition: Option<WeatherCondition>,
    /// Prefer candidates whose colors match the items already chosen
    pub use_color_matching: bool,
    /// Minimum average compatibility for color matching, 0 to 1
    pub color_match_threshold: f64,
    /// Drop unsuitable items and prefer recommended ones for the weather
    pub use_weather_rules: bool,
    /// Lean towards favorite items
    pub prefer_favorites: bool,
    /// Seed the outfit with a top and a bottom
    pub ensure_complete_outfit: bool,
}

impl Default for RandomizeOptions {
    fn default() -> Self {
        Self {
            min_items: DEFAULT_MIN_ITEMS,
            max_items: DEFAULT_MAX_ITEMS,
            avoid_same_category: true,
            required_categories: Vec::new(),
            excluded_categories: Vec::new(),
            required_tags: Vec::new(),
            excluded_tags: Vec::new(),
            weather_condition: None,
            use_color_matching: false,
            color_match_threshold: DEFAULT_COLOR_MATCH_THRESHOLD,
            use_weather_rules: false,
            prefer_favorites: false,
            ensure_complete_outfit: false,
        }
    }
}

impl RandomizeOptions {
    /// Preset with every preference stage switched on
    pub fn smart() -> Self {
        Self {
            use_color_matching: true,
            use_weather_rules: true,
            prefer_favorites: true,
            ensure_complete_outfit: true,
            ..Self::default()
        }
    }

    /// Size bounds with `min <= max` enforced by lowering `min`
    pub fn item_bounds(&self) -> (usize, usize) {
        (self.min_items.min(self.max_items), self.max_items)
    }

    /// Color threshold clamped to `[0, 1]`; NaN falls back to the default
    pub fn color_threshold(&self) -> f64 {
        if self.color_match_threshold.is_nan() {
            DEFAULT_COLOR_MATCH_THRESHOLD
        } else {
            self.color_match_threshold.clamp(0.0, 1.0)
        }
    }

    /// Weather bucket to apply, present only when weather rules are on
    pub const fn active_weather(&self) -> Option<WeatherCondition> {
        if self.use_weather_rules {
            self.weather_condition
        } else {
            None
        }
    }

    /// Strict check for user-supplied options
    ///
    /// The engine tolerates anything; front ends call this to report
    /// mistakes instead of silently clamping them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_items` exceeds `max_items`
    /// - `color_match_threshold` lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.min_items > self.max_items {
            return Err(invalid_parameter(
                "min_items",
                &self.min_items,
                &format!("must not exceed max_items ({})", self.max_items),
            ));
        }
        if !(0.0..=1.0).contains(&self.color_match_threshold) {
            return Err(invalid_parameter(
                "color_match_threshold",
                &self.color_match_threshold,
                &"must lie between 0 and 1",
            ));
        }
        Ok(())
    }
}
