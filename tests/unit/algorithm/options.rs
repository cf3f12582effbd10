//! Tests for option defaults, presets, clamping and validation

#[cfg(test)]
mod tests {
    use wardrobe_shuffle::WardrobeError;
    use wardrobe_shuffle::algorithm::options::RandomizeOptions;
    use wardrobe_shuffle::matching::weather::WeatherCondition;

    // Tests default values
    // Verified by turning category avoidance off by default
    #[test]
    fn test_defaults() {
        let options = RandomizeOptions::default();
        assert_eq!(options.item_bounds(), (2, 4));
        assert!(options.avoid_same_category);
        assert!(!options.use_color_matching);
        assert!(!options.use_weather_rules);
        assert!(!options.prefer_favorites);
        assert!(!options.ensure_complete_outfit);
        assert!((options.color_threshold() - 0.5).abs() < f64::EPSILON);
        assert!(options.validate().is_ok());
    }

    // Tests the smart preset enables every preference
    // Verified by leaving weather rules off in the preset
    #[test]
    fn test_smart_preset() {
        let options = RandomizeOptions::smart();
        assert!(options.use_color_matching);
        assert!(options.use_weather_rules);
        assert!(options.prefer_favorites);
        assert!(options.ensure_complete_outfit);
        assert!(options.avoid_same_category);
    }

    // Tests inverted bounds lower the minimum
    // Verified by raising max to min instead
    #[test]
    fn test_item_bounds_clamped() {
        let options = RandomizeOptions {
            min_items: 5,
            max_items: 3,
            ..RandomizeOptions::default()
        };
        assert_eq!(options.item_bounds(), (3, 3));
    }

    // Tests threshold clamping and NaN fallback
    // Verified by passing NaN through unchanged
    #[test]
    fn test_color_threshold_clamped() {
        let with = |threshold: f64| RandomizeOptions {
            color_match_threshold: threshold,
            ..RandomizeOptions::default()
        };
        assert!((with(1.7).color_threshold() - 1.0).abs() < f64::EPSILON);
        assert!(with(-0.2).color_threshold().abs() < f64::EPSILON);
        assert!((with(f64::NAN).color_threshold() - 0.5).abs() < f64::EPSILON);
    }

    // Tests weather applies only when weather rules are on
    // Verified by returning the condition unconditionally
    #[test]
    fn test_active_weather() {
        let mut options = RandomizeOptions {
            weather_condition: Some(WeatherCondition::Cold),
            ..RandomizeOptions::default()
        };
        assert_eq!(options.active_weather(), None);

        options.use_weather_rules = true;
        assert_eq!(options.active_weather(), Some(WeatherCondition::Cold));
    }

    // Tests validation rejects inverted bounds and bad thresholds
    // Verified by skipping the threshold check
    #[test]
    fn test_validate() {
        let inverted = RandomizeOptions {
            min_items: 6,
            max_items: 2,
            ..RandomizeOptions::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(WardrobeError::InvalidParameter {
                parameter: "min_items",
                ..
            })
        ));

        let threshold = RandomizeOptions {
            color_match_threshold: 1.5,
            ..RandomizeOptions::default()
        };
        assert!(matches!(
            threshold.validate(),
            Err(WardrobeError::InvalidParameter {
                parameter: "color_match_threshold",
                ..
            })
        ));
    }

    // Tests partial camelCase JSON fills the rest from defaults
    // Verified by removing the serde default attribute
    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"maxItems": 3, "weatherCondition": "hot", "useWeatherRules": true}"#;
        let options: RandomizeOptions = serde_json::from_str(json).expect("valid options");

        assert_eq!(options.item_bounds(), (2, 3));
        assert_eq!(options.active_weather(), Some(WeatherCondition::Hot));
        assert!(options.avoid_same_category);
    }
}
