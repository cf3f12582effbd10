//! Engine constants and runtime configuration defaults

// Outfit size bounds used when options leave them unset
/// Default lower bound on outfit size
pub const DEFAULT_MIN_ITEMS: usize = 2;
/// Default upper bound on outfit size
pub const DEFAULT_MAX_ITEMS: usize = 4;

/// Minimum average color compatibility for a candidate to survive color filtering
pub const DEFAULT_COLOR_MATCH_THRESHOLD: f64 = 0.5;

// Soft preferences are a single draw against this probability, not a hard filter
/// Probability that the favorites-only / weather-recommended narrowing is applied
pub const PREFERENCE_PROBABILITY: f64 = 0.7;

// Scoring weights
/// Points per item in an outfit
pub const SCORE_PER_ITEM: f64 = 10.0;
/// Multiplier applied to outfit color harmony (0-1)
pub const SCORE_COLOR_HARMONY: f64 = 30.0;
/// Bonus when a top is present
pub const SCORE_TOP_BONUS: f64 = 15.0;
/// Bonus when a bottom is present
pub const SCORE_BOTTOM_BONUS: f64 = 15.0;
/// Bonus when shoes are present
pub const SCORE_SHOES_BONUS: f64 = 10.0;
/// Bonus when every item suits the supplied weather
pub const SCORE_WEATHER_BONUS: f64 = 20.0;
/// Points per favorite item
pub const SCORE_PER_FAVORITE: f64 = 5.0;

// Item availability
/// Milliseconds in one day
pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;
/// Milliseconds in seven days
pub const SEVEN_DAYS_MS: i64 = 7 * ONE_DAY_MS;

/// Prefix marking a tag as a user list rather than a descriptive tag
pub const LIST_TAG_PREFIX: &str = "_list:";
/// Built-in list tag for favorite items
pub const FAVORITES_LIST_TAG: &str = "_list:favorites";

// CLI defaults
/// Number of outfits generated per run
pub const DEFAULT_OUTFIT_COUNT: usize = 1;
/// Batch size above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 100;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
