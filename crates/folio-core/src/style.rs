//! Badge colors per technology category.

use crate::models::Category;

pub const DEFAULT_BADGE_CLASS: &str =
    "bg-gray-100 dark:bg-gray-900/30 text-gray-800 dark:text-gray-300";

const CATEGORY_CLASSES: [(Category, &str); 7] = [
    (
        Category::Frontend,
        "bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-300",
    ),
    (
        Category::Backend,
        "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-300",
    ),
    (
        Category::Database,
        "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-800 dark:text-yellow-300",
    ),
    (
        Category::Language,
        "bg-red-100 dark:bg-red-900/30 text-red-800 dark:text-red-300",
    ),
    (
        Category::Mobile,
        "bg-indigo-100 dark:bg-indigo-900/30 text-indigo-800 dark:text-indigo-300",
    ),
    (
        Category::State,
        "bg-purple-100 dark:bg-purple-900/30 text-purple-800 dark:text-purple-300",
    ),
    (
        Category::Styling,
        "bg-pink-100 dark:bg-pink-900/30 text-pink-800 dark:text-pink-300",
    ),
];

impl Category {
    /// Color classes for a badge of this category. `Other` gets the default.
    pub fn badge_class(&self) -> &'static str {
        CATEGORY_CLASSES
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, class)| *class)
            .unwrap_or(DEFAULT_BADGE_CLASS)
    }
}

/// Color classes for a raw category string from the data file.
pub fn category_class(raw: &str) -> &'static str {
    raw.parse::<Category>()
        .map(|c| c.badge_class())
        .unwrap_or(DEFAULT_BADGE_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_categories_have_their_own_color() {
        let expected = [
            ("frontend", "blue"),
            ("backend", "green"),
            ("database", "yellow"),
            ("language", "red"),
            ("mobile", "indigo"),
            ("state", "purple"),
            ("styling", "pink"),
        ];
        for (raw, color) in expected {
            let class = category_class(raw);
            assert!(class.starts_with(&format!("bg-{}-100", color)), "{raw}: {class}");
            assert_ne!(class, DEFAULT_BADGE_CLASS);
        }
    }

    #[test]
    fn other_and_unknown_use_default() {
        assert_eq!(Category::Other.badge_class(), DEFAULT_BADGE_CLASS);
        assert_eq!(category_class("other"), DEFAULT_BADGE_CLASS);
        assert_eq!(category_class("devops"), DEFAULT_BADGE_CLASS);
        assert_eq!(category_class("FRONTEND"), DEFAULT_BADGE_CLASS);
        assert_eq!(category_class(""), DEFAULT_BADGE_CLASS);
    }

    #[test]
    fn every_named_category_is_in_the_table() {
        for category in Category::ALL {
            let listed = CATEGORY_CLASSES.iter().any(|(c, _)| *c == category);
            assert_eq!(listed, category != Category::Other, "{category}");
        }
    }
}
