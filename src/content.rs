// Static page content, fixed at build time and never mutated.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub prep_time: &'static str,
    pub dietary: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        name: "Stellar Sushi Platter",
        price: "$32",
        description: "Premium selection of fresh sushi with unique molecular gastronomy elements",
        category: "Signature Dishes",
        rating: 4.8,
        prep_time: "25 mins",
        dietary: &["GF", "DF"],
    },
    MenuItem {
        name: "Quantum Quinoa Bowl",
        price: "$24",
        description: "Ancient grains meet modern technique with seasonal vegetables",
        category: "Main Course",
        rating: 4.6,
        prep_time: "20 mins",
        dietary: &["V", "GF"],
    },
    MenuItem {
        name: "Neo Tokyo Ramen",
        price: "$28",
        description: "Signature black broth with hover-suspended ingredients",
        category: "Signature Dishes",
        rating: 4.9,
        prep_time: "22 mins",
        dietary: &["DF"],
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Interactive Tables",
        description: "Digital surface for real-time order customization",
        icon: "✨",
    },
    Feature {
        title: "Ambient Lighting",
        description: "Responsive lighting that adapts to your dining experience",
        icon: "💡",
    },
    Feature {
        title: "Holographic Menu",
        description: "3D visualization of every dish before ordering",
        icon: "🔮",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_exactly_three_items() {
        assert_eq!(MENU_ITEMS.len(), 3);
    }

    #[test]
    fn features_have_exactly_three_entries() {
        assert_eq!(FEATURES.len(), 3);
    }

    #[test]
    fn menu_items_are_fully_populated() {
        for item in MENU_ITEMS {
            assert!(!item.name.is_empty());
            assert!(!item.price.is_empty());
            assert!(!item.description.is_empty());
            assert!(!item.category.is_empty());
            assert!(!item.prep_time.is_empty());
            assert!(item.rating >= 0.0 && item.rating <= 5.0);
            assert!(!item.dietary.is_empty());
            for tag in item.dietary {
                assert!(!tag.is_empty());
            }
        }
    }

    #[test]
    fn features_are_fully_populated() {
        for feature in FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
            assert!(!feature.icon.is_empty());
        }
    }
}
