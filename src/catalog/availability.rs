//! Hidden / hidden-until lifecycle deciding which items are eligible

use crate::catalog::item::Item;
use crate::io::configuration::{ONE_DAY_MS, SEVEN_DAYS_MS};
use chrono::Utc;

/// Preset durations for temporarily hiding an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideDuration {
    /// Hidden for 24 hours
    OneDay,
    /// Hidden for a week
    SevenDays,
}

impl HideDuration {
    /// Length in milliseconds
    pub const fn as_millis(self) -> i64 {
        match self {
            Self::OneDay => ONE_DAY_MS,
            Self::SevenDays => SEVEN_DAYS_MS,
        }
    }
}

/// Current wall-clock time in milliseconds since epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Expiry instant for hiding an item starting at `now_ms`
pub const fn hidden_until_after(now_ms: i64, duration: HideDuration) -> i64 {
    now_ms.saturating_add(duration.as_millis())
}

/// Whether an item is hidden at the given instant
///
/// The indefinite flag wins; otherwise the item stays hidden while
/// `now_ms < hidden_until` and reappears once the instant is reached.
pub fn is_item_hidden_at(item: &Item, now_ms: i64) -> bool {
    if item.hidden == Some(true) {
        return true;
    }
    item.hidden_until.is_some_and(|until| until > now_ms)
}

/// Whether an item is hidden right now
pub fn is_item_hidden(item: &Item) -> bool {
    is_item_hidden_at(item, now_millis())
}

/// Items currently eligible for display and generation
pub fn filter_visible_items(items: &[Item]) -> Vec<&Item> {
    let now = now_millis();
    items
        .iter()
        .filter(|item| !is_item_hidden_at(item, now))
        .collect()
}

/// Items currently hidden
pub fn filter_hidden_items(items: &[Item]) -> Vec<&Item> {
    let now = now_millis();
    items
        .iter()
        .filter(|item| is_item_hidden_at(item, now))
        .collect()
}
