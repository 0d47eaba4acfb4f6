use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description available.";
pub const UNKNOWN_SOURCE: &str = "Unknown Source";
pub const DATE_UNKNOWN: &str = "Date Unknown";

/// One item of the API `data` array, as received. Nothing is validated
/// here; normalization happens when building an `ArticleRecord`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    pub title: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
}

/// Image state of a rendered card. The two placeholder states are distinct
/// so a display surface can label them differently; both are non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleImage {
    Url(String),
    Invalid,
    Missing,
}

/// Normalized, display-ready representation of one news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
    pub image: ArticleImage,
    pub description: String,
    pub source: String,
    pub published: String,
}

impl ArticleRecord {
    /// Build a record from a raw item. Returns `None` when `title` or `url`
    /// is absent or empty; such items are dropped from the rendered list.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let title = raw.title.filter(|t| !t.is_empty())?;
        let url = raw.url.filter(|u| !u.is_empty())?;

        let image = match raw.image {
            // The API sometimes returns non-URL junk in the image field
            Some(i) if i.starts_with("http") => ArticleImage::Url(i),
            Some(_) => ArticleImage::Invalid,
            None => ArticleImage::Missing,
        };

        let published = raw
            .published_at
            .as_deref()
            .and_then(format_published)
            .unwrap_or_else(|| DATE_UNKNOWN.to_string());

        Some(Self {
            title,
            url,
            image,
            description: raw
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            source: raw.source.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            published,
        })
    }
}

/// Format a `published_at` timestamp as a short date, e.g. "Jan 5, 2024".
/// Mediastack mostly sends RFC 3339, but offsets without a colon show up too.
fn format_published(raw: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()?;
    Some(parsed.format("%b %-d, %Y").to_string())
}
