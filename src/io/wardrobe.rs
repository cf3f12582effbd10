//! Wardrobe file loading and outfit export
//!
//! A wardrobe file is a JSON array of item records in the storage layer's
//! camelCase shape. Exported outfits record item ids and names with the score.

use crate::algorithm::executor::RankedOutfit;
use crate::catalog::Item;
use crate::io::error::{Result, WardrobeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serializable summary of a ranked outfit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecord {
    /// Outfit score
    pub score: i64,
    /// Ids of the chosen items, in selection order
    pub item_ids: Vec<u64>,
    /// Names of the chosen items, in selection order
    pub item_names: Vec<String>,
}

impl From<&RankedOutfit<'_>> for OutfitRecord {
    fn from(ranked: &RankedOutfit<'_>) -> Self {
        Self {
            score: ranked.score,
            item_ids: ranked.items.iter().map(|item| item.id).collect(),
            item_names: ranked.items.iter().map(|item| item.name.clone()).collect(),
        }
    }
}

/// Parse a JSON item list
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of item records
pub fn parse_wardrobe(json: &str) -> Result<Vec<Item>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a wardrobe file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a JSON array of item records
pub fn load_wardrobe(path: &Path) -> Result<Vec<Item>> {
    let text = fs::read_to_string(path).map_err(|e| WardrobeError::WardrobeLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&text).map_err(|e| WardrobeError::WardrobeParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write ranked outfits as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization or the file write fails
pub fn write_outfits(path: &Path, outfits: &[RankedOutfit<'_>]) -> Result<()> {
    let records: Vec<OutfitRecord> = outfits.iter().map(OutfitRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;

    fs::write(path, json).map_err(|e| WardrobeError::FileSystem {
        path: path.to_path_buf(),
        operation: "write outfits",
        source: e,
    })
}
