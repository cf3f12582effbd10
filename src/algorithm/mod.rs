/// Outfit assembly and batch generation
pub mod executor;
/// Bitset of taken pool positions
pub mod mask;
/// Generation option set and presets
pub mod options;
/// Outfit scoring for ranking
pub mod scoring;
/// Filtering, grouping and candidate narrowing stages
pub mod selection;
