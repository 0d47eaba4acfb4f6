use crate::domain::{ArticleRecord, FilterState};
use crate::errors::{NewsdeskError, NewsdeskResult};
use crate::output::{ContentSurface, StatusLine};
use crate::services::query_builder::QueryBuilder;
use crate::services::renderer;
use crate::services::status_reporter::{self, FetchOutcome};
use crate::sources::NewsSource;

/// Orchestrates one fetch cycle: build the query, fetch, then either render
/// cards or report the empty/error outcome.
pub struct FetchService<S: NewsSource> {
    query_builder: QueryBuilder,
    source: S,
    insecure_endpoint: bool,
}

impl<S: NewsSource> FetchService<S> {
    pub fn new(query_builder: QueryBuilder, source: S, insecure_endpoint: bool) -> Self {
        Self {
            query_builder,
            source,
            insecure_endpoint,
        }
    }

    /// Run one complete cycle against the given surface. Failures are
    /// reported through the surface and never escape this boundary; the
    /// returned outcome lets the caller pick an exit code.
    pub fn run<D: ContentSurface + StatusLine>(
        &self,
        filters: &FilterState,
        surface: &mut D,
    ) -> FetchOutcome {
        surface.set_status("Fetching news...", false);

        let outcome = match self.execute(filters) {
            Ok(cards) if cards.is_empty() => FetchOutcome::Empty,
            Ok(cards) => {
                let count = cards.len();
                surface.replace_cards(&cards);
                FetchOutcome::Success(count)
            }
            Err(e) => FetchOutcome::Failed(self.friendly_message(&e)),
        };

        status_reporter::report(surface, &outcome);
        outcome
    }

    fn execute(&self, filters: &FilterState) -> NewsdeskResult<Vec<ArticleRecord>> {
        let query = self.query_builder.build(filters)?;
        let items = self.source.fetch(&query)?;
        Ok(renderer::render(items))
    }

    /// User-facing phrasing for a failed cycle. Credential and quota
    /// failures get dedicated wording; everything else carries the raw
    /// error detail.
    fn friendly_message(&self, error: &NewsdeskError) -> String {
        match error {
            NewsdeskError::MissingAccessKey => error.to_string(),
            NewsdeskError::Network(_) => {
                let mut message =
                    "Failed to fetch news. Please check your network connection.".to_string();
                if self.insecure_endpoint {
                    message.push_str(
                        " The configured endpoint uses plain HTTP, which some networks and proxies block.",
                    );
                }
                message
            }
            NewsdeskError::Api { code, .. } if code == "invalid_access_key" => {
                "Failed to fetch news. Invalid API Key provided.".to_string()
            }
            NewsdeskError::Http(401) => {
                "Failed to fetch news. Invalid API Key provided.".to_string()
            }
            NewsdeskError::Api { code, .. } if code == "usage_limit_reached" => {
                "Failed to fetch news. API usage limit reached.".to_string()
            }
            NewsdeskError::Http(429) => {
                "Failed to fetch news. API usage limit reached.".to_string()
            }
            other => format!("Failed to fetch news. Details: {}", other),
        }
    }
}
