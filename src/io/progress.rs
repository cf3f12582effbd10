//! Progress display for large outfit batches

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Outfits: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of generated outfits
///
/// Small batches finish too quickly to be worth drawing, so the bar is only
/// created once the batch reaches [`PROGRESS_THRESHOLD`].
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager for `total` outfits
    pub fn new(total: usize) -> Self {
        let bar = Self::should_display(total).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Create a manager that never draws
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Whether a batch of this size gets a visible bar
    pub const fn should_display(total: usize) -> bool {
        total >= PROGRESS_THRESHOLD
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Report the number of outfits generated so far
    pub fn update(&self, done: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(done as u64);
        }
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
