//! Tests for category normalization, display names and slot grouping

#[cfg(test)]
mod tests {
    use wardrobe_shuffle::catalog::Item;
    use wardrobe_shuffle::catalog::category::{
        Category, categorize_items, category_display_name, normalize_category,
    };

    // Tests canonical names map to themselves
    // Verified by removing canonical names from the lookup table
    #[test]
    fn test_canonical_names() {
        for category in Category::ALL {
            assert_eq!(normalize_category(Some(category.as_str())), Some(category));
        }
    }

    // Tests aliases across every slot
    // Verified by moving "t-shirt" into the bottom group
    #[test]
    fn test_aliases() {
        let cases = [
            ("T-Shirt", Category::Top),
            ("tank top", Category::Top),
            ("Jeans", Category::Bottom),
            ("leggings", Category::Bottom),
            ("LOAFERS", Category::Shoes),
            ("hoodie", Category::Outerwear),
            ("beanie", Category::Hat),
            ("sunglasses", Category::Accessory),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_category(Some(input)), Some(expected), "{input}");
        }
    }

    // Tests surrounding whitespace is ignored
    // Verified by removing the trim call
    #[test]
    fn test_trims_input() {
        assert_eq!(normalize_category(Some("  Shoes \t")), Some(Category::Shoes));
    }

    // Tests unknown, blank and missing input yields None
    // Verified by defaulting unknown labels to accessory
    #[test]
    fn test_unrecognized_is_none() {
        assert_eq!(normalize_category(Some("xyz")), None);
        assert_eq!(normalize_category(Some("")), None);
        assert_eq!(normalize_category(Some("   ")), None);
        assert_eq!(normalize_category(None), None);
    }

    // Tests display name capitalization
    // Verified by returning the raw lowercase name
    #[test]
    fn test_display_name() {
        assert_eq!(category_display_name(Category::Outerwear), "Outerwear");
        assert_eq!(category_display_name(Category::Hat), "Hat");
    }

    // Tests slot grouping sends unknown categories to accessory
    // Verified by dropping items with no normalized category
    #[test]
    fn test_categorize_items() {
        let items = vec![
            Item::new(1, "Tee").with_category("tee"),
            Item::new(2, "Mystery"),
            Item::new(3, "Thing").with_category("gizmo"),
            Item::new(4, "Boots").with_category("boots"),
        ];

        let slots = categorize_items(&items);

        assert_eq!(slots.len(), 6);
        assert_eq!(slots.get(&Category::Top).map(Vec::len), Some(1));
        assert_eq!(slots.get(&Category::Shoes).map(Vec::len), Some(1));
        assert_eq!(slots.get(&Category::Accessory).map(Vec::len), Some(2));
        assert_eq!(slots.get(&Category::Hat).map(Vec::len), Some(0));
    }
}
