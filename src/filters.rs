//! Named categories of wildcard extension filters.

/// File category a picker method can be invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Audio,
    Image,
    Video,
    Media,
    Custom,
    Any,
}

// Read-only for the life of the process. Row order must match the enum.
static CATEGORY_FILTERS: &[(Category, &str, &[&str])] = &[
    (Category::Audio, "audio", &["*.mp3", "*.mp4"]),
    (Category::Image, "image", &["*.jpg", "*.jpeg", "*.png"]),
    (Category::Video, "video", &["*.mp4"]),
    (Category::Media, "media", &["*.mp4", "*.jpg", "*.jpeg", "*.png"]),
    (Category::Custom, "custom", &[]),
    (Category::Any, "any", &["*.*"]),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Audio,
        Category::Image,
        Category::Video,
        Category::Media,
        Category::Custom,
        Category::Any,
    ];

    /// Look up a category by method name. Matching is exact and case-sensitive.
    pub fn from_method(name: &str) -> Option<Self> {
        CATEGORY_FILTERS
            .iter()
            .find(|(_, key, _)| *key == name)
            .map(|(category, _, _)| *category)
    }

    fn entry(&self) -> &'static (Category, &'static str, &'static [&'static str]) {
        // Rows are stored in declaration order of the enum.
        &CATEGORY_FILTERS[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().1
    }

    /// Predefined patterns, in display order.
    pub fn extensions(&self) -> &'static [&'static str] {
        self.entry().2
    }

    /// Predefined patterns followed by caller-supplied ones.
    pub fn filters_with(&self, extra: impl IntoIterator<Item = String>) -> Vec<String> {
        self.extensions()
            .iter()
            .map(|s| s.to_string())
            .chain(extra)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(Category::from_method(category.as_str()), Some(category));
        }
    }

    #[test]
    fn table_rows_follow_enum_order() {
        for (i, (category, _, _)) in CATEGORY_FILTERS.iter().enumerate() {
            assert_eq!(*category as usize, i);
        }
    }

    #[test]
    fn unknown_and_differently_cased_names_are_rejected() {
        assert_eq!(Category::from_method("frobnicate"), None);
        assert_eq!(Category::from_method("Image"), None);
        assert_eq!(Category::from_method("dir"), None);
    }

    #[test]
    fn predefined_patterns() {
        assert_eq!(Category::Image.extensions(), &["*.jpg", "*.jpeg", "*.png"]);
        assert_eq!(Category::Any.extensions(), &["*.*"]);
        assert!(Category::Custom.extensions().is_empty());
    }

    #[test]
    fn extra_patterns_are_appended() {
        let filters = Category::Video.filters_with(vec!["*.mkv".to_string()]);
        assert_eq!(filters, vec!["*.mp4", "*.mkv"]);
    }
}
