use crate::domain::{ArticleRecord, RawArticle};

/// Map raw API items to display-ready records. Items missing a title or a
/// URL are dropped; response order is preserved (the API already sorts by
/// publication date, newest first).
pub fn render(items: Vec<RawArticle>) -> Vec<ArticleRecord> {
    items
        .into_iter()
        .filter_map(ArticleRecord::from_raw)
        .collect()
}
