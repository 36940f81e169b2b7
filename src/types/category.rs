//! Display metadata for the built-in expense categories

/// Color and icon for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    /// Hex color
    pub color: &'static str,
    /// Icon name
    pub icon: &'static str,
}

/// Built-in categories, in form order
pub const CATEGORIES: [CategoryInfo; 8] = [
    CategoryInfo {
        name: "Food",
        color: "#10B981",
        icon: "utensils",
    },
    CategoryInfo {
        name: "Transport",
        color: "#8B5CF6",
        icon: "car",
    },
    CategoryInfo {
        name: "Housing",
        color: "#06B6D4",
        icon: "home",
    },
    CategoryInfo {
        name: "Utilities",
        color: "#3B82F6",
        icon: "zap",
    },
    CategoryInfo {
        name: "Entertainment",
        color: "#F59E0B",
        icon: "film",
    },
    CategoryInfo {
        name: "Health",
        color: "#F43F5E",
        icon: "heart-pulse",
    },
    CategoryInfo {
        name: "Shopping",
        color: "#EC4899",
        icon: "shopping-bag",
    },
    CategoryInfo {
        name: "Other",
        color: "#94A3B8",
        icon: "layers",
    },
];

/// Metadata used for names outside the built-in set
pub const UNKNOWN_CATEGORY: CategoryInfo = CategoryInfo {
    name: "Other",
    color: "#94A3B8",
    icon: "layers",
};

/// Preselected category for new entries
pub const DEFAULT_CATEGORY: &str = "Food";

/// Category given to imported records that carry none
pub const IMPORT_FALLBACK_CATEGORY: &str = "Other";

/// Look up display metadata. Matching is exact (case-sensitive).
pub fn category_info(name: &str) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .unwrap_or(&UNKNOWN_CATEGORY)
}
