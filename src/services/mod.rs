pub mod fetch_service;
pub mod query_builder;
pub mod renderer;
pub mod status_reporter;

pub use fetch_service::FetchService;
pub use query_builder::QueryBuilder;
pub use status_reporter::FetchOutcome;
