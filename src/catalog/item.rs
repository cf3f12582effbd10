//! Clothing item records and list-tag helpers

use crate::catalog::category::{Category, normalize_category};
use crate::io::configuration::{FAVORITES_LIST_TAG, LIST_TAG_PREFIX};
use serde::{Deserialize, Serialize};

/// A single catalogued garment
///
/// Field names serialize in camelCase so records written by the storage
/// layer load verbatim. The engine only ever reads items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque identity assigned by storage
    #[serde(default)]
    pub id: u64,
    /// Display name, also scanned for color and weather keywords
    pub name: String,
    /// Free-text category label
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text tags; order is irrelevant for matching
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Explicit favorite flag
    #[serde(default)]
    pub favorite: Option<bool>,
    /// Hidden indefinitely when set
    #[serde(default)]
    pub hidden: Option<bool>,
    /// Hidden until this instant (milliseconds since epoch)
    #[serde(default)]
    pub hidden_until: Option<i64>,
    /// Creation instant (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

impl Item {
    /// Create an uncategorized, untagged item
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            tags: None,
            favorite: None,
            hidden: None,
            hidden_until: None,
            created_at: 0,
        }
    }

    /// Set the free-text category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the tag list
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the favorite flag
    #[must_use]
    pub const fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = Some(favorite);
        self
    }

    /// Set the indefinite hidden flag
    #[must_use]
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Hide until the given instant
    #[must_use]
    pub const fn with_hidden_until(mut self, until_ms: i64) -> Self {
        self.hidden_until = Some(until_ms);
        self
    }

    /// Set the creation instant
    #[must_use]
    pub const fn with_created_at(mut self, created_ms: i64) -> Self {
        self.created_at = created_ms;
        self
    }

    /// Tags as a slice, empty when absent
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags()
            .iter()
            .any(|existing| existing.trim().to_lowercase() == wanted)
    }

    /// Favorite either by flag or by membership in the favorites list
    pub fn is_favorite(&self) -> bool {
        self.favorite == Some(true) || self.has_tag(FAVORITES_LIST_TAG)
    }

    /// Canonical garment slot, `None` when missing or unrecognized
    pub fn normalized_category(&self) -> Option<Category> {
        normalize_category(self.category.as_deref())
    }

    /// Lower-cased name and tags joined by spaces, used for keyword scans
    pub fn search_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        for tag in self.tags() {
            text.push(' ');
            text.push_str(&tag.to_lowercase());
        }
        text
    }
}

/// Check whether a tag marks a user list
pub fn is_list_tag(tag: &str) -> bool {
    tag.starts_with(LIST_TAG_PREFIX)
}

/// Strip the list prefix for display; non-list tags pass through
pub fn list_display_name(tag: &str) -> &str {
    tag.strip_prefix(LIST_TAG_PREFIX).unwrap_or(tag)
}

/// Build a list tag from a user-facing list name
///
/// The name is lower-cased and whitespace runs collapse to a single hyphen.
pub fn create_list_tag(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{LIST_TAG_PREFIX}{slug}")
}
