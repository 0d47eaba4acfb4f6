pub mod article;
pub mod filter;
pub mod query;

pub use article::{ArticleImage, ArticleRecord, RawArticle};
pub use filter::{Category, FilterState};
pub use query::{QueryDescriptor, SortOrder};
