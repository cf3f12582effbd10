//! Constraint-aware random outfit generation over a clothing catalog
//!
//! Items are filtered by availability and explicit rules, grouped into garment
//! slots, and drawn at random with optional color, favorite and weather
//! preferences. A deterministic score ranks the resulting outfits.

#![forbid(unsafe_code)]

/// Outfit assembly, candidate narrowing and scoring
pub mod algorithm;
/// Item records, category normalization and availability
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Color harmony and weather suitability heuristics
pub mod matching;

pub use algorithm::executor::{OutfitGenerator, pick_random_outfit, pick_random_outfit_with};
pub use algorithm::options::RandomizeOptions;
pub use algorithm::scoring::score_outfit;
pub use catalog::{Category, Item};
pub use io::error::{Result, WardrobeError};
pub use matching::WeatherCondition;
