/// Command-line interface and runner
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Batch progress display
pub mod progress;
/// Wardrobe file loading and outfit export
pub mod wardrobe;
