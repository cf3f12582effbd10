//! Color extraction from item text and harmony scoring
//!
//! Colors are detected by substring search over the item name and tags, then
//! judged against a hand-authored table of pairings that go well together.

use crate::catalog::item::Item;
use ndarray::Array2;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A lower-cased color name from [`COLOR_NAMES`]
pub type ColorName = &'static str;

/// Color vocabulary recognized in names and tags
pub const COLOR_NAMES: [ColorName; 28] = [
    "black", "white", "gray", "grey", "navy", "blue", "red", "green", "yellow", "orange", "purple",
    "pink", "brown", "beige", "tan", "cream", "ivory", "burgundy", "maroon", "olive", "teal",
    "coral", "gold", "silver", "khaki", "denim", "charcoal", "indigo",
];

/// Colors that pair with almost anything
pub const NEUTRAL_COLORS: [ColorName; 10] = [
    "black", "white", "gray", "grey", "beige", "tan", "cream", "ivory", "khaki", "charcoal",
];

static COLOR_HARMONIES: LazyLock<HashMap<ColorName, &'static [ColorName]>> =
    LazyLock::new(|| {
        let table: [(ColorName, &'static [ColorName]); 27] = [
            (
                "black",
                &[
                    "white", "gray", "red", "pink", "yellow", "gold", "silver", "navy", "beige",
                    "cream",
                ],
            ),
            (
                "white",
                &[
                    "black", "navy", "blue", "red", "gray", "beige", "tan", "brown", "olive",
                    "pink",
                ],
            ),
            (
                "gray",
                &[
                    "black", "white", "pink", "blue", "navy", "red", "yellow", "purple",
                ],
            ),
            (
                "navy",
                &[
                    "white", "cream", "beige", "tan", "khaki", "gray", "pink", "coral", "gold",
                ],
            ),
            (
                "blue",
                &[
                    "white", "gray", "navy", "tan", "brown", "orange", "coral", "beige",
                ],
            ),
            (
                "red",
                &["black", "white", "gray", "navy", "denim", "beige", "tan"],
            ),
            (
                "green",
                &[
                    "white", "cream", "brown", "tan", "beige", "navy", "khaki", "gold",
                ],
            ),
            (
                "yellow",
                &["navy", "blue", "gray", "white", "black", "brown", "denim"],
            ),
            (
                "orange",
                &["navy", "blue", "white", "brown", "tan", "denim", "cream"],
            ),
            (
                "purple",
                &["white", "gray", "black", "cream", "silver", "gold", "navy"],
            ),
            (
                "pink",
                &["white", "gray", "navy", "black", "cream", "denim", "silver"],
            ),
            (
                "brown",
                &[
                    "white", "cream", "beige", "tan", "blue", "navy", "green", "orange",
                ],
            ),
            (
                "beige",
                &["navy", "brown", "white", "burgundy", "olive", "blue", "black"],
            ),
            (
                "tan",
                &["navy", "white", "brown", "burgundy", "olive", "blue", "green"],
            ),
            (
                "cream",
                &["navy", "brown", "burgundy", "olive", "blue", "black", "green"],
            ),
            (
                "ivory",
                &["navy", "brown", "burgundy", "olive", "black", "gold"],
            ),
            (
                "burgundy",
                &["white", "cream", "beige", "tan", "navy", "gray", "khaki"],
            ),
            (
                "maroon",
                &["white", "cream", "beige", "tan", "navy", "gray", "khaki"],
            ),
            (
                "olive",
                &["white", "cream", "tan", "beige", "brown", "burgundy", "navy"],
            ),
            (
                "teal",
                &["white", "cream", "coral", "tan", "navy", "gray", "beige"],
            ),
            (
                "coral",
                &["navy", "white", "teal", "cream", "gray", "beige", "denim"],
            ),
            (
                "gold",
                &["black", "navy", "burgundy", "white", "cream", "brown"],
            ),
            (
                "silver",
                &["black", "white", "gray", "navy", "purple", "pink"],
            ),
            (
                "khaki",
                &["navy", "white", "brown", "burgundy", "olive", "blue", "black"],
            ),
            (
                "denim",
                &[
                    "white", "black", "cream", "tan", "brown", "red", "yellow", "pink", "burgundy",
                ],
            ),
            (
                "charcoal",
                &["white", "pink", "blue", "cream", "silver", "gold", "coral"],
            ),
            (
                "indigo",
                &["white", "cream", "tan", "coral", "gold", "beige"],
            ),
        ];
        table.into_iter().collect()
    });

/// Collapse spelling variants onto one table key
fn canonical_color(color: &str) -> &str {
    if color == "grey" { "gray" } else { color }
}

/// Every vocabulary color mentioned in the item's name or tags
pub fn extract_colors(item: &Item) -> Vec<ColorName> {
    let text = item.search_text();
    COLOR_NAMES
        .iter()
        .copied()
        .filter(|color| text.contains(*color))
        .collect()
}

/// Whether two colors pair well
///
/// Identical colors always match. Otherwise either color listing the other
/// is enough, which makes the relation symmetric.
pub fn are_colors_harmonious(first: &str, second: &str) -> bool {
    let first = canonical_color(first);
    let second = canonical_color(second);

    if first == second {
        return true;
    }

    let lists = |from: &str, to: &str| {
        COLOR_HARMONIES
            .get(from)
            .is_some_and(|partners| partners.iter().any(|&partner| partner == to))
    };

    lists(first, second) || lists(second, first)
}

/// Whether a color belongs to the neutral set
pub fn is_neutral_color(color: &str) -> bool {
    NEUTRAL_COLORS.iter().any(|&neutral| neutral == color)
}

/// Fraction of harmonious color pairs between two items, in `[0, 1]`
///
/// Items without detectable colors, or pairs where everything is neutral,
/// score a full 1.
pub fn calculate_color_compatibility(first: &Item, second: &Item) -> f64 {
    let first_colors = extract_colors(first);
    let second_colors = extract_colors(second);

    if first_colors.is_empty() || second_colors.is_empty() {
        return 1.0;
    }

    let all_neutral = |colors: &[ColorName]| colors.iter().all(|color| is_neutral_color(color));
    if all_neutral(&first_colors) && all_neutral(&second_colors) {
        return 1.0;
    }

    let mut matches = 0_usize;
    let mut total = 0_usize;
    for a in &first_colors {
        for b in &second_colors {
            total += 1;
            if are_colors_harmonious(a, b) {
                matches += 1;
            }
        }
    }

    if total == 0 {
        1.0
    } else {
        matches as f64 / total as f64
    }
}

/// Symmetric matrix of pairwise compatibilities with ones on the diagonal
pub fn compatibility_matrix<I: Borrow<Item>>(items: &[I]) -> Array2<f64> {
    let n = items.len();
    let mut matrix = Array2::<f64>::ones((n, n));

    for (i, first) in items.iter().enumerate() {
        for (j, second) in items.iter().enumerate().skip(i + 1) {
            let score = calculate_color_compatibility(
                <I as Borrow<Item>>::borrow(first),
                <I as Borrow<Item>>::borrow(second),
            );
            if let Some(cell) = matrix.get_mut([i, j]) {
                *cell = score;
            }
            if let Some(cell) = matrix.get_mut([j, i]) {
                *cell = score;
            }
        }
    }

    matrix
}

/// Mean compatibility over all unordered item pairs; fewer than two items score 1
pub fn calculate_outfit_color_harmony<I: Borrow<Item>>(items: &[I]) -> f64 {
    let n = items.len();
    if n < 2 {
        return 1.0;
    }

    let matrix = compatibility_matrix(items);
    let upper: f64 = matrix
        .indexed_iter()
        .filter(|((i, j), _)| i < j)
        .map(|(_, &score)| score)
        .sum();
    let pairs = n * (n - 1) / 2;

    upper / pairs as f64
}

/// Average compatibility of a candidate against every existing item
///
/// Returns 1 when there is nothing to compare against.
pub fn average_compatibility<E: Borrow<Item>>(candidate: &Item, existing: &[E]) -> f64 {
    if existing.is_empty() {
        return 1.0;
    }
    let total: f64 = existing
        .iter()
        .map(|other| calculate_color_compatibility(candidate, <E as Borrow<Item>>::borrow(other)))
        .sum();
    total / existing.len() as f64
}

/// Keep candidates whose average compatibility with `existing` meets the threshold
///
/// With no existing items every candidate is kept unchanged.
pub fn filter_color_compatible_items<C, E>(
    candidates: &[C],
    existing: &[E],
    min_compatibility: f64,
) -> Vec<C>
where
    C: Borrow<Item> + Clone,
    E: Borrow<Item>,
{
    if existing.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|&candidate| {
            average_compatibility(<C as Borrow<Item>>::borrow(candidate), existing) >= min_compatibility
        })
        .cloned()
        .collect()
}
