use crate::errors::{NewsdeskError, NewsdeskResult};

/// News categories recognized by the Mediastack API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "business" => Ok(Category::Business),
            "entertainment" => Ok(Category::Entertainment),
            "health" => Ok(Category::Health),
            "science" => Ok(Category::Science),
            "sports" => Ok(Category::Sports),
            "technology" => Ok(Category::Technology),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current filter selections for one fetch cycle. Owned by the CLI layer;
/// the core only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Two-letter country code, lowercase. `None` = unrestricted.
    pub country: Option<String>,
    /// `None` = unrestricted.
    pub category: Option<Category>,
    /// Free search text. Trimmed at build time; whitespace-only counts as
    /// no keyword filter.
    pub query: Option<String>,
}

impl FilterState {
    pub fn new(
        country: Option<String>,
        category: Option<Category>,
        query: Option<String>,
    ) -> Self {
        Self {
            country,
            category,
            query,
        }
    }
}

/// Validate and normalize a country code: exactly two ASCII letters,
/// lowercased.
pub fn parse_country_code(raw: &str) -> NewsdeskResult<String> {
    let trimmed = raw.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_lowercase())
    } else {
        Err(NewsdeskError::InvalidInput(format!(
            "Country must be a two-letter code like 'us' or 'gb', got '{}'",
            raw
        )))
    }
}
