//! Deterministic outfit scoring for ranking and display

use crate::catalog::{Category, Item};
use crate::io::configuration::{
    SCORE_BOTTOM_BONUS, SCORE_COLOR_HARMONY, SCORE_PER_FAVORITE, SCORE_PER_ITEM,
    SCORE_SHOES_BONUS, SCORE_TOP_BONUS, SCORE_WEATHER_BONUS,
};
use crate::matching::color::calculate_outfit_color_harmony;
use crate::matching::weather::{WeatherCondition, is_item_suitable_for_weather};
use std::borrow::Borrow;

/// Score an outfit; higher is better
///
/// Sums a per-item base, color harmony, bonuses for a top, a bottom and
/// shoes, a weather bonus when every item suits the supplied bucket, and a
/// per-favorite bonus. Rounded to the nearest integer. Never feeds back into
/// selection.
pub fn score_outfit<I: Borrow<Item>>(outfit: &[I], weather: Option<WeatherCondition>) -> i64 {
    let items: Vec<&Item> = outfit
        .iter()
        .map(<I as Borrow<Item>>::borrow)
        .collect();
    let has = |slot: Category| {
        items
            .iter()
            .any(|item| item.normalized_category() == Some(slot))
    };

    let mut score = SCORE_PER_ITEM * items.len() as f64;
    score += SCORE_COLOR_HARMONY * calculate_outfit_color_harmony(&items);

    if has(Category::Top) {
        score += SCORE_TOP_BONUS;
    }
    if has(Category::Bottom) {
        score += SCORE_BOTTOM_BONUS;
    }
    if has(Category::Shoes) {
        score += SCORE_SHOES_BONUS;
    }

    if let Some(condition) = weather {
        if items
            .iter()
            .all(|item| is_item_suitable_for_weather(item, condition))
        {
            score += SCORE_WEATHER_BONUS;
        }
    }

    let favorites = items.iter().filter(|item| item.is_favorite()).count();
    score += SCORE_PER_FAVORITE * favorites as f64;

    score.round() as i64
}
