use std::fmt;

/// The fixed set of topics the news service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Business,
    Technology,
    Science,
    Health,
    Entertainment,
    Sports,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 6] = [
        Category::Business,
        Category::Technology,
        Category::Science,
        Category::Health,
        Category::Entertainment,
        Category::Sports,
    ];

    /// Wire value used for the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Science => "science",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
        }
    }

    /// Human-readable name shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Science => "Science",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
        }
    }

    /// Looks up a wire value. Matching is exact, like the service's enum.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_value(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_and_differently_cased_values_are_not_categories() {
        assert_eq!(Category::from_value("politics"), None);
        assert_eq!(Category::from_value("Business"), None);
        assert_eq!(Category::from_value(""), None);
    }
}
