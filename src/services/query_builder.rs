use crate::config::{Config, PLACEHOLDER_ACCESS_KEY};
use crate::domain::{Category, FilterState, QueryDescriptor, SortOrder};
use crate::errors::{NewsdeskError, NewsdeskResult};

const LANGUAGES: &str = "en";
const RESULT_LIMIT: u32 = 50;

/// Token Mediastack accepts as "no category restriction". The API does not
/// recognize "general" as a category, so it maps here when no keyword
/// search is active.
pub const GENERAL_SENTINEL: &str = "-";

/// Resolves filter state into a `QueryDescriptor` for one fetch cycle.
pub struct QueryBuilder {
    access_key: String,
}

impl QueryBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            access_key: config.access_key.clone(),
        }
    }

    /// Pure function of the filter state and the configured key. Fails only
    /// when no usable access key is configured; reporting that is the
    /// caller's job.
    pub fn build(&self, filters: &FilterState) -> NewsdeskResult<QueryDescriptor> {
        if self.access_key.trim().is_empty() || self.access_key == PLACEHOLDER_ACCESS_KEY {
            return Err(NewsdeskError::MissingAccessKey);
        }

        let query = filters
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let mut descriptor = QueryDescriptor {
            access_key: self.access_key.clone(),
            languages: LANGUAGES,
            limit: RESULT_LIMIT,
            sort: SortOrder::PublishedDesc,
            keywords: None,
            countries: None,
            categories: None,
        };

        match query {
            Some(keywords) => {
                // Keyword search takes priority; filters still narrow it,
                // and the category passes through unchanged
                descriptor.keywords = Some(keywords.to_string());
                descriptor.countries = filters.country.clone();
                descriptor.categories =
                    filters.category.map(|c| c.as_str().to_string());
            }
            None => {
                descriptor.countries = filters.country.clone();
                descriptor.categories = filters.category.map(|c| match c {
                    Category::General => GENERAL_SENTINEL.to_string(),
                    other => other.as_str().to_string(),
                });
            }
        }

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> QueryBuilder {
        QueryBuilder {
            access_key: "test-key".to_string(),
        }
    }

    fn keyless_builder() -> QueryBuilder {
        QueryBuilder {
            access_key: String::new(),
        }
    }

    #[test]
    fn test_build_always_sets_fixed_params() {
        let filters = FilterState::new(
            Some("us".to_string()),
            Some(Category::Business),
            Some("markets".to_string()),
        );
        let descriptor = builder().build(&filters).unwrap();

        assert_eq!(descriptor.languages, "en");
        assert_eq!(descriptor.limit, 50);
        assert_eq!(descriptor.sort, SortOrder::PublishedDesc);
    }

    #[test]
    fn test_build_fails_without_key_regardless_of_filters() {
        let states = [
            FilterState::default(),
            FilterState::new(Some("us".to_string()), None, None),
            FilterState::new(None, Some(Category::Sports), Some("cup".to_string())),
        ];
        for filters in states {
            assert!(matches!(
                keyless_builder().build(&filters),
                Err(NewsdeskError::MissingAccessKey)
            ));
        }
    }

    #[test]
    fn test_build_fails_with_placeholder_key() {
        let builder = QueryBuilder {
            access_key: PLACEHOLDER_ACCESS_KEY.to_string(),
        };
        assert!(matches!(
            builder.build(&FilterState::default()),
            Err(NewsdeskError::MissingAccessKey)
        ));
    }

    #[test]
    fn test_build_with_keyword_search_sets_keywords_and_filters() {
        let filters = FilterState::new(
            Some("gb".to_string()),
            Some(Category::Technology),
            Some("  rust  ".to_string()),
        );
        let descriptor = builder().build(&filters).unwrap();

        assert_eq!(descriptor.keywords.as_deref(), Some("rust"));
        assert_eq!(descriptor.countries.as_deref(), Some("gb"));
        assert_eq!(descriptor.categories.as_deref(), Some("technology"));
    }

    #[test]
    fn test_general_passes_through_under_keyword_search() {
        let filters = FilterState::new(
            None,
            Some(Category::General),
            Some("elections".to_string()),
        );
        let descriptor = builder().build(&filters).unwrap();
        assert_eq!(descriptor.categories.as_deref(), Some("general"));
    }

    #[test]
    fn test_general_maps_to_sentinel_without_keyword_search() {
        let filters = FilterState::new(None, Some(Category::General), None);
        let descriptor = builder().build(&filters).unwrap();
        assert_eq!(descriptor.categories.as_deref(), Some(GENERAL_SENTINEL));
    }

    #[test]
    fn test_whitespace_query_counts_as_no_search() {
        let filters = FilterState::new(None, Some(Category::General), Some("   ".to_string()));
        let descriptor = builder().build(&filters).unwrap();
        assert!(descriptor.keywords.is_none());
        assert_eq!(descriptor.categories.as_deref(), Some(GENERAL_SENTINEL));
    }

    #[test]
    fn test_unrestricted_filters_omit_optional_params() {
        let descriptor = builder().build(&FilterState::default()).unwrap();
        assert!(descriptor.keywords.is_none());
        assert!(descriptor.countries.is_none());
        assert!(descriptor.categories.is_none());
    }

    #[test]
    fn test_build_is_idempotent() {
        let filters = FilterState::new(
            Some("de".to_string()),
            Some(Category::Health),
            Some("vaccine".to_string()),
        );
        let b = builder();
        assert_eq!(b.build(&filters).unwrap(), b.build(&filters).unwrap());
    }
}
