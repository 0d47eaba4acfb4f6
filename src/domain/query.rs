#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PublishedDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PublishedDesc => "published_desc",
        }
    }
}

/// Fully resolved outbound request parameters for one fetch cycle.
/// Immutable once built; a new cycle builds a new descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub access_key: String,
    pub languages: &'static str,
    pub limit: u32,
    pub sort: SortOrder,
    pub keywords: Option<String>,
    pub countries: Option<String>,
    pub categories: Option<String>,
}

impl QueryDescriptor {
    /// Expand into ordered query parameters. Unset optional fields are
    /// omitted entirely rather than sent empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("access_key", self.access_key.clone()),
            ("languages", self.languages.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ];

        if let Some(keywords) = &self.keywords {
            pairs.push(("keywords", keywords.clone()));
        }
        if let Some(countries) = &self.countries {
            pairs.push(("countries", countries.clone()));
        }
        if let Some(categories) = &self.categories {
            pairs.push(("categories", categories.clone()));
        }

        pairs
    }
}
