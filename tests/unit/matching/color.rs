//! Tests for color extraction, harmony and compatibility scoring

#[cfg(test)]
mod tests {
    use wardrobe_shuffle::catalog::Item;
    use wardrobe_shuffle::matching::color::{
        COLOR_NAMES, are_colors_harmonious, average_compatibility, calculate_color_compatibility,
        calculate_outfit_color_harmony, compatibility_matrix, extract_colors,
        filter_color_compatible_items, is_neutral_color,
    };

    fn colored(id: u64, color: &str) -> Item {
        Item::new(id, format!("{color} piece"))
    }

    // Tests colors are found in names and tags
    // Verified by searching only the name
    #[test]
    fn test_extract_colors() {
        let item = Item::new(1, "Navy Blazer").with_tags(["Gold buttons"]);
        let colors = extract_colors(&item);
        assert!(colors.contains(&"navy"));
        assert!(colors.contains(&"gold"));
        assert_eq!(colors.len(), 2);
    }

    // Tests items without color words yield nothing
    // Verified by defaulting to black
    #[test]
    fn test_extract_no_colors() {
        assert!(extract_colors(&Item::new(1, "Sneakers")).is_empty());
    }

    // Tests identical colors and grey spelling
    // Verified by removing the grey canonicalization
    #[test]
    fn test_identity_and_grey() {
        assert!(are_colors_harmonious("red", "red"));
        assert!(are_colors_harmonious("grey", "gray"));
        assert!(are_colors_harmonious("grey", "pink"));
        assert!(!are_colors_harmonious("red", "green"));
    }

    // Tests harmony and compatibility are symmetric across the vocabulary
    // Verified by checking only the first color's partner list
    #[test]
    fn test_symmetry() {
        for (i, a) in COLOR_NAMES.iter().enumerate() {
            for (j, b) in COLOR_NAMES.iter().enumerate() {
                assert_eq!(
                    are_colors_harmonious(a, b),
                    are_colors_harmonious(b, a),
                    "{a}/{b}"
                );

                let first = colored(i as u64, a);
                let second = colored(j as u64, b);
                let forward = calculate_color_compatibility(&first, &second);
                let backward = calculate_color_compatibility(&second, &first);
                assert!((forward - backward).abs() < f64::EPSILON, "{a}/{b}");
                assert!((0.0..=1.0).contains(&forward));
            }
        }
    }

    // Tests neutral membership
    // Verified by marking navy neutral
    #[test]
    fn test_neutral_colors() {
        assert!(is_neutral_color("khaki"));
        assert!(is_neutral_color("grey"));
        assert!(!is_neutral_color("navy"));
    }

    // Tests a classic pairing scores above the default threshold
    // Verified by returning 0 when one side is neutral
    #[test]
    fn test_navy_blazer_white_shirt() {
        let blazer = Item::new(1, "Navy Blazer");
        let shirt = Item::new(2, "White Shirt");
        assert!(calculate_color_compatibility(&blazer, &shirt) > 0.5);
    }

    // Tests colorless and all-neutral pairs score a full 1
    // Verified by returning 0 for empty color sets
    #[test]
    fn test_full_compatibility_cases() {
        let plain = Item::new(1, "Sneakers");
        let red = Item::new(2, "Red Shirt");
        let black = Item::new(3, "Black Jeans");
        let white = Item::new(4, "White Tee");

        assert!((calculate_color_compatibility(&plain, &red) - 1.0).abs() < f64::EPSILON);
        assert!((calculate_color_compatibility(&black, &white) - 1.0).abs() < f64::EPSILON);
    }

    // Tests clashing colors score zero
    // Verified by counting identical pairs only
    #[test]
    fn test_clash_scores_zero() {
        let red = Item::new(1, "Red Shirt");
        let green = Item::new(2, "Green Pants");
        assert!(calculate_color_compatibility(&red, &green).abs() < f64::EPSILON);
    }

    // Tests partial matches give the fraction of harmonious pairs
    // Verified by returning 1 on any match
    #[test]
    fn test_partial_fraction() {
        let shirt = Item::new(1, "Red and Purple Shirt");
        let pants = Item::new(2, "Denim Shorts");
        let score = calculate_color_compatibility(&shirt, &pants);
        assert!((score - 0.5).abs() < 1e-9);
    }

    // Tests outfit harmony averages every pair
    // Verified by averaging only adjacent pairs
    #[test]
    fn test_outfit_harmony() {
        assert!((calculate_outfit_color_harmony::<Item>(&[]) - 1.0).abs() < f64::EPSILON);
        assert!(
            (calculate_outfit_color_harmony(&[Item::new(1, "Red Shirt")]) - 1.0).abs()
                < f64::EPSILON
        );

        let outfit = vec![
            Item::new(1, "Red Shirt"),
            Item::new(2, "Green Pants"),
            Item::new(3, "Sneakers"),
        ];
        let harmony = calculate_outfit_color_harmony(&outfit);
        assert!((harmony - 2.0 / 3.0).abs() < 1e-9);
    }

    // Tests the pairwise matrix is symmetric with a unit diagonal
    // Verified by filling only the upper triangle
    #[test]
    fn test_compatibility_matrix() {
        let items = vec![
            Item::new(1, "Red Shirt"),
            Item::new(2, "Green Pants"),
            Item::new(3, "Navy Blazer"),
        ];
        let matrix = compatibility_matrix(&items);

        assert_eq!(matrix.dim(), (3, 3));
        for i in 0..3 {
            assert!((matrix[[i, i]] - 1.0).abs() < f64::EPSILON);
            for j in 0..3 {
                assert!((matrix[[i, j]] - matrix[[j, i]]).abs() < f64::EPSILON);
            }
        }
        assert!(matrix[[0, 1]].abs() < f64::EPSILON);
    }

    // Tests average compatibility against nothing is 1
    // Verified by dividing by zero items
    #[test]
    fn test_average_compatibility_empty() {
        let none: Vec<Item> = Vec::new();
        let score = average_compatibility(&Item::new(1, "Red Shirt"), &none);
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    // Tests threshold filtering against chosen items
    // Verified by keeping every candidate
    #[test]
    fn test_filter_color_compatible_items() {
        let chosen = vec![Item::new(1, "Red Shirt")];
        let candidates = vec![
            Item::new(2, "Green Pants"),
            Item::new(3, "Black Jeans"),
            Item::new(4, "Sneakers"),
        ];

        let kept = filter_color_compatible_items(&candidates, &chosen, 0.5);
        let ids: Vec<u64> = kept.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let nothing_chosen: Vec<Item> = Vec::new();
        assert_eq!(
            filter_color_compatible_items(&candidates, &nothing_chosen, 0.5).len(),
            3
        );
    }
}
