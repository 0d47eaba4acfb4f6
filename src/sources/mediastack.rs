use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{QueryDescriptor, RawArticle};
use crate::errors::{NewsdeskError, NewsdeskResult};
use crate::sources::traits::NewsSource;

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    data: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

pub struct MediastackSource {
    client: Client,
    base_url: String,
}

impl MediastackSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.to_string(),
        }
    }

    fn request_url(&self, query: &QueryDescriptor) -> NewsdeskResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| NewsdeskError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        Ok(url)
    }

    /// Normalize a non-2xx response into an error. A structured
    /// `{error: {code, message|type}}` body wins; anything else keeps the
    /// bare status code.
    fn error_from_response(status: u16, body: &str) -> NewsdeskError {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            if let Some(error) = envelope.error {
                if let (Some(code), Some(message)) = (error.code, error.message.or(error.kind)) {
                    return NewsdeskError::Api { code, message };
                }
            }
        }
        NewsdeskError::Http(status)
    }

    /// A 2xx body that is not the expected `{data: [...]}` shape maps to a
    /// generic API error rather than crashing the cycle.
    fn items_from_body(body: &str) -> NewsdeskResult<Vec<RawArticle>> {
        let envelope: NewsEnvelope =
            serde_json::from_str(body).map_err(|_| NewsdeskError::invalid_response())?;
        Ok(envelope.data)
    }
}

impl NewsSource for MediastackSource {
    fn fetch(&self, query: &QueryDescriptor) -> NewsdeskResult<Vec<RawArticle>> {
        let url = self.request_url(query)?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NewsdeskError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| NewsdeskError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_response(status.as_u16(), &body));
        }

        Self::items_from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortOrder;

    fn descriptor() -> QueryDescriptor {
        QueryDescriptor {
            access_key: "test-key".to_string(),
            languages: "en",
            limit: 50,
            sort: SortOrder::PublishedDesc,
            keywords: None,
            countries: None,
            categories: None,
        }
    }

    #[test]
    fn test_request_url_fixed_params() {
        let source = MediastackSource::new("http://api.mediastack.com/v1/news");
        let url = source.request_url(&descriptor()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.mediastack.com/v1/news?access_key=test-key&languages=en&limit=50&sort=published_desc"
        );
    }

    #[test]
    fn test_request_url_encodes_keywords() {
        let source = MediastackSource::new("http://api.mediastack.com/v1/news");
        let mut query = descriptor();
        query.keywords = Some("climate change".to_string());

        let url = source.request_url(&query).unwrap();
        assert!(url.as_str().contains("keywords=climate+change"));
    }

    #[test]
    fn test_request_url_omits_unset_filters() {
        let source = MediastackSource::new("http://api.mediastack.com/v1/news");
        let url = source.request_url(&descriptor()).unwrap();
        assert!(!url.as_str().contains("keywords"));
        assert!(!url.as_str().contains("countries"));
        assert!(!url.as_str().contains("categories"));
    }

    #[test]
    fn test_request_url_rejects_bad_base() {
        let source = MediastackSource::new("not a url");
        assert!(matches!(
            source.request_url(&descriptor()),
            Err(NewsdeskError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_error_from_structured_body() {
        let body = r#"{"error": {"code": "invalid_access_key", "message": "Invalid key."}}"#;
        match MediastackSource::error_from_response(401, body) {
            NewsdeskError::Api { code, message } => {
                assert_eq!(code, "invalid_access_key");
                assert_eq!(message, "Invalid key.");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_falls_back_to_type_field() {
        let body = r#"{"error": {"code": "usage_limit_reached", "type": "usage_limit_reached"}}"#;
        match MediastackSource::error_from_response(429, body) {
            NewsdeskError::Api { code, message } => {
                assert_eq!(code, "usage_limit_reached");
                assert_eq!(message, "usage_limit_reached");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_without_code_keeps_status() {
        let body = r#"{"error": {"message": "something"}}"#;
        assert!(matches!(
            MediastackSource::error_from_response(500, body),
            NewsdeskError::Http(500)
        ));
    }

    #[test]
    fn test_error_with_unparseable_body_keeps_status() {
        assert!(matches!(
            MediastackSource::error_from_response(502, "<html>Bad Gateway</html>"),
            NewsdeskError::Http(502)
        ));
    }

    #[test]
    fn test_items_from_body() {
        let body = r#"{"data": [{"title": "A", "url": "http://x"}, {"url": "http://y"}]}"#;
        let items = MediastackSource::items_from_body(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("A"));
        assert!(items[1].title.is_none());
    }

    #[test]
    fn test_items_from_body_empty_data() {
        let items = MediastackSource::items_from_body(r#"{"data": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_items_from_body_missing_data_field() {
        assert!(matches!(
            MediastackSource::items_from_body(r#"{"pagination": {}}"#),
            Err(NewsdeskError::Api { .. })
        ));
    }

    #[test]
    fn test_items_from_body_not_json() {
        assert!(matches!(
            MediastackSource::items_from_body("not json"),
            Err(NewsdeskError::Api { .. })
        ));
    }
}
