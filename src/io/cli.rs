//! Command-line interface for generating ranked outfits from a wardrobe file

use crate::algorithm::executor::{OutfitGenerator, RankedOutfit};
use crate::algorithm::options::RandomizeOptions;
use crate::catalog::category::category_display_name;
use crate::io::configuration::{
    DEFAULT_COLOR_MATCH_THRESHOLD, DEFAULT_MAX_ITEMS, DEFAULT_MIN_ITEMS, DEFAULT_OUTFIT_COUNT,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::wardrobe::{load_wardrobe, write_outfits};
use crate::matching::weather::{WeatherCondition, map_temp_to_condition};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "wardrobe-shuffle")]
#[command(
    author,
    version,
    about = "Generate ranked outfit combinations from a wardrobe file"
)]
/// Command-line arguments for the outfit generator
// Each flag maps onto an independent generation stage
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON file holding an array of wardrobe items
    #[arg(value_name = "WARDROBE")]
    pub wardrobe: PathBuf,

    /// Number of outfits to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_OUTFIT_COUNT)]
    pub count: usize,

    /// Random seed for reproducible output (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Minimum number of items per outfit
    #[arg(long, default_value_t = DEFAULT_MIN_ITEMS)]
    pub min: usize,

    /// Maximum number of items per outfit
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    pub max: usize,

    /// Weather bucket (hot, warm, mild, cool, cold, freezing); enables weather rules
    #[arg(short, long, conflicts_with = "temperature")]
    pub weather: Option<WeatherCondition>,

    /// Temperature in Celsius, mapped to a weather bucket; enables weather rules
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Start from the preset with every preference enabled
    #[arg(long)]
    pub smart: bool,

    /// Prefer items whose colors match the rest of the outfit
    #[arg(short, long)]
    pub color_matching: bool,

    /// Minimum average color compatibility (0-1)
    #[arg(long, default_value_t = DEFAULT_COLOR_MATCH_THRESHOLD)]
    pub threshold: f64,

    /// Lean towards favorite items
    #[arg(short, long)]
    pub favorites: bool,

    /// Always start with a top and a bottom
    #[arg(long)]
    pub complete: bool,

    /// Allow several items from the same category
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Only use items with this raw category (repeatable)
    #[arg(long = "require-category", value_name = "CATEGORY")]
    pub require_categories: Vec<String>,

    /// Skip items with this raw category (repeatable)
    #[arg(long = "exclude-category", value_name = "CATEGORY")]
    pub exclude_categories: Vec<String>,

    /// Only use items carrying this tag (repeatable, all required)
    #[arg(long = "require-tag", value_name = "TAG")]
    pub require_tags: Vec<String>,

    /// Skip items carrying this tag (repeatable)
    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,

    /// Also write the ranked outfits to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Weather bucket from either `--weather` or `--temperature`
    pub fn weather_condition(&self) -> Option<WeatherCondition> {
        self.weather
            .or_else(|| self.temperature.map(map_temp_to_condition))
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build generation options from the flags
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds or threshold are out of range
    pub fn options(&self) -> Result<RandomizeOptions> {
        let base = if self.smart {
            RandomizeOptions::smart()
        } else {
            RandomizeOptions::default()
        };

        let weather_condition = self.weather_condition();

        let options = RandomizeOptions {
            min_items: self.min,
            max_items: self.max,
            avoid_same_category: !self.allow_duplicates,
            required_categories: self.require_categories.clone(),
            excluded_categories: self.exclude_categories.clone(),
            required_tags: self.require_tags.clone(),
            excluded_tags: self.exclude_tags.clone(),
            weather_condition,
            use_color_matching: base.use_color_matching || self.color_matching,
            color_match_threshold: self.threshold,
            use_weather_rules: weather_condition.is_some(),
            prefer_favorites: base.prefer_favorites || self.favorites,
            ensure_complete_outfit: base.ensure_complete_outfit || self.complete,
        };

        options.validate()?;
        Ok(options)
    }
}

/// Write outfits as a numbered, human-readable listing
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render_outfits<W: Write>(out: &mut W, outfits: &[RankedOutfit<'_>]) -> Result<()> {
    for (rank, outfit) in outfits.iter().enumerate() {
        writeln!(out, "Outfit {} (score {})", rank + 1, outfit.score)?;
        if outfit.items.is_empty() {
            writeln!(out, "  (no eligible items)")?;
        }
        for item in &outfit.items {
            let slot = item
                .normalized_category()
                .map_or_else(|| "Uncategorized".to_string(), category_display_name);
            writeln!(out, "  - {} [{slot}]", item.name)?;
        }
    }
    Ok(())
}

/// Loads a wardrobe, generates outfits and reports them
pub struct OutfitRunner {
    cli: Cli,
}

impl OutfitRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate and report outfits according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options are invalid
    /// - The wardrobe file cannot be loaded
    /// - Writing the results fails
    pub fn run(&self) -> Result<()> {
        let options = self.cli.options()?;
        let items = load_wardrobe(&self.cli.wardrobe)?;
        info!(
            items = items.len(),
            path = %self.cli.wardrobe.display(),
            "loaded wardrobe"
        );

        let mut generator = self
            .cli
            .seed
            .map_or_else(OutfitGenerator::from_entropy, OutfitGenerator::seeded);

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.count)
        } else {
            ProgressManager::hidden()
        };

        let outfits =
            generator.generate_ranked_with(&items, self.cli.count, &options, |done| {
                progress.update(done);
            });
        progress.finish();

        if outfits.iter().all(|outfit| outfit.items.is_empty()) {
            warn!("no eligible items left after filtering");
        }

        if let Some(ref path) = self.cli.output {
            write_outfits(path, &outfits)?;
            info!(path = %path.display(), "wrote outfits");
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        render_outfits(&mut handle, &outfits)
    }
}
