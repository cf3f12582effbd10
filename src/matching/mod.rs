//! Heuristics judging how items go together and with the weather

/// Color extraction and harmony scoring
pub mod color;
/// Weather buckets and suitability rules
pub mod weather;

pub use weather::WeatherCondition;
