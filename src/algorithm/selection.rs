use crate::{
    algorithm::options::RandomizeOptions,
    catalog::{Category, Item, availability::is_item_hidden_at},
    io::configuration::PREFERENCE_PROBABILITY,
    matching::{
        color::average_compatibility,
        weather::{is_item_recommended_for_weather, is_item_suitable_for_weather},
    },
};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

fn label_matches(raw: &str, labels: &[String]) -> bool {
    let raw = raw.trim().to_lowercase();
    labels.iter().any(|label| label.trim().to_lowercase() == raw)
}

/// Whether an item survives the explicit category, tag and weather rules
///
/// Category rules compare the raw label case-insensitively. An item without a
/// category, or with a blank one, passes the required-category rule.
pub fn passes_rules(item: &Item, options: &RandomizeOptions) -> bool {
    let label = item
        .category
        .as_deref()
        .filter(|raw| !raw.trim().is_empty());
    if let Some(raw) = label {
        if !options.required_categories.is_empty()
            && !label_matches(raw, &options.required_categories)
        {
            return false;
        }
        if label_matches(raw, &options.excluded_categories) {
            return false;
        }
    }

    if !options.required_tags.iter().all(|tag| item.has_tag(tag)) {
        return false;
    }
    if options.excluded_tags.iter().any(|tag| item.has_tag(tag)) {
        return false;
    }

    options
        .active_weather()
        .is_none_or(|condition| is_item_suitable_for_weather(item, condition))
}

/// Hard filtering stage: availability first, then the explicit rules
pub fn filter_eligible<'a>(
    items: &'a [Item],
    options: &RandomizeOptions,
    now_ms: i64,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| !is_item_hidden_at(item, now_ms))
        .filter(|item| passes_rules(item, options))
        .collect()
}

/// Stable reorder putting favorites ahead of everything else
pub fn favorites_first(pool: &mut [&Item]) {
    pool.sort_by_key(|item| !item.is_favorite());
}

/// Pool positions per normalized category
///
/// Items whose category is missing or unrecognized are left out. Ordered by
/// category so seeded runs are reproducible.
pub fn group_by_category(pool: &[&Item]) -> BTreeMap<Category, Vec<usize>> {
    let mut groups: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
    for (index, item) in pool.iter().enumerate() {
        if let Some(category) = item.normalized_category() {
            groups.entry(category).or_default().push(index);
        }
    }
    groups
}

/// Outfit size drawn uniformly from the clamped bounds
pub fn random_target_size<R: Rng>(options: &RandomizeOptions, rng: &mut R) -> usize {
    let (min, max) = options.item_bounds();
    rng.random_range(min..=max)
}

/// Replace `candidates` with `narrowed` unless that would leave nothing
fn prefer(candidates: Vec<usize>, narrowed: Vec<usize>) -> Vec<usize> {
    if narrowed.is_empty() {
        candidates
    } else {
        narrowed
    }
}

/// Apply the soft preference stages to a candidate list
///
/// Runs, in order: color compatibility against `chosen` (when color matching
/// is on), favorites only (70% of the time when favorites are preferred),
/// weather-recommended only (70% of the time when weather rules are active).
/// A stage whose result would be empty is skipped.
pub fn narrow_candidates<R: Rng>(
    candidates: Vec<usize>,
    pool: &[&Item],
    chosen: &[&Item],
    options: &RandomizeOptions,
    rng: &mut R,
) -> Vec<usize> {
    let keep = |candidates: &[usize], predicate: &dyn Fn(&Item) -> bool| -> Vec<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&index| pool.get(index).is_some_and(|&item| predicate(item)))
            .collect()
    };

    let mut candidates = candidates;

    if options.use_color_matching {
        let threshold = options.color_threshold();
        let compatible = keep(&candidates, &|item: &Item| {
            average_compatibility(item, chosen) >= threshold
        });
        candidates = prefer(candidates, compatible);
    }

    if options.prefer_favorites && rng.random::<f64>() < PREFERENCE_PROBABILITY {
        let favorites = keep(&candidates, &Item::is_favorite);
        candidates = prefer(candidates, favorites);
    }

    if let Some(condition) = options.active_weather() {
        if rng.random::<f64>() < PREFERENCE_PROBABILITY {
            let recommended = keep(&candidates, &|item: &Item| {
                is_item_recommended_for_weather(item, condition)
            });
            candidates = prefer(candidates, recommended);
        }
    }

    candidates
}

/// Shuffle the candidates and take the first
pub fn pick_candidate<R: Rng>(mut candidates: Vec<usize>, rng: &mut R) -> Option<usize> {
    candidates.shuffle(rng);
    candidates.first().copied()
}
