// SPDX-License-Identifier: MPL-2.0
//! Category slugs and their localized display names.

/// Known product categories.
///
/// Unknown slugs are displayed verbatim rather than rejected, so new
/// categories can appear in the database before the client learns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WoodenToys,
    Plush,
    Games,
    Puzzles,
    Educational,
    Outdoor,
}

impl Category {
    /// Parses a category slug as stored in product documents.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "wooden-toys" => Some(Category::WoodenToys),
            "plush" => Some(Category::Plush),
            "games" => Some(Category::Games),
            "puzzles" => Some(Category::Puzzles),
            "educational" => Some(Category::Educational),
            "outdoor" => Some(Category::Outdoor),
            _ => None,
        }
    }

    /// Returns the i18n message key for the display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::WoodenToys => "category-wooden-toys",
            Category::Plush => "category-plush",
            Category::Games => "category-games",
            Category::Puzzles => "category-puzzles",
            Category::Educational => "category-educational",
            Category::Outdoor => "category-outdoor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slug_round_trips_known_categories() {
        assert_eq!(Category::from_slug("wooden-toys"), Some(Category::WoodenToys));
        assert_eq!(Category::from_slug("plush"), Some(Category::Plush));
        assert_eq!(Category::from_slug("outdoor"), Some(Category::Outdoor));
    }

    #[test]
    fn from_slug_rejects_unknown() {
        assert_eq!(Category::from_slug("vehicles"), None);
    }

    #[test]
    fn i18n_keys_follow_slug_convention() {
        assert_eq!(Category::Puzzles.i18n_key(), "category-puzzles");
    }
}
