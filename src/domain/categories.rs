//! Category taxonomy.
//!
//! Static navigation/filtering data; not persisted and not user-editable.

/// Taxonomy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,

    /// Icon tag consumed by whatever renders the taxonomy.
    pub icon: &'static str,

    /// Sub-category names, in display order.
    pub sub_categories: &'static [&'static str],
}

/// The built-in taxonomy.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Electronics",
        icon: "laptop",
        sub_categories: &["Computers", "Phones", "Audio", "Cameras"],
    },
    Category {
        name: "Clothing",
        icon: "shirt",
        sub_categories: &["Men", "Women", "Kids", "Accessories"],
    },
    Category {
        name: "Home & Garden",
        icon: "home",
        sub_categories: &["Furniture", "Home Decor", "Kitchen", "Garden"],
    },
    Category {
        name: "Books",
        icon: "book-open",
        sub_categories: &["Fiction", "Non-fiction", "Comics", "Textbooks"],
    },
    Category {
        name: "Sports",
        icon: "dumbbell",
        sub_categories: &["Fitness", "Outdoor", "Cycling", "Team Sports"],
    },
    Category {
        name: "Beauty",
        icon: "sparkles",
        sub_categories: &["Skincare", "Fragrance", "Hair"],
    },
    Category {
        name: "Gaming",
        icon: "gamepad-2",
        sub_categories: &["Consoles", "Games", "Accessories"],
    },
    Category {
        name: "Art & Crafts",
        icon: "palette",
        sub_categories: &["Paintings", "Ceramics", "Supplies"],
    },
];

/// Look up a taxonomy entry by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_finds_known_categories() {
        let category = by_name("Electronics").expect("Electronics should exist");

        assert_eq!(category.icon, "laptop");
        assert!(category.sub_categories.contains(&"Audio"));
    }

    #[test]
    fn by_name_returns_none_for_unknown() {
        assert_eq!(by_name("Vehicles"), None);
    }

    #[test]
    fn every_category_has_sub_categories() {
        assert!(
            CATEGORIES
                .iter()
                .all(|category| !category.sub_categories.is_empty()),
            "a category without sub-categories renders as an empty section"
        );
    }
}
