/// Default news endpoint. The free Mediastack plan only serves plain HTTP.
pub const DEFAULT_BASE_URL: &str = "http://api.mediastack.com/v1/news";

/// Placeholder shipped in the original client config; treated as "not set".
pub const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_MEDIASTACK_ACCESS_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    /// Raw access key as configured. May be empty or the placeholder;
    /// `QueryBuilder::build` is where an unusable key is rejected.
    pub access_key: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let access_key = std::env::var("MEDIASTACK_ACCESS_KEY").unwrap_or_default();
        let base_url = std::env::var("MEDIASTACK_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            access_key,
            base_url,
        }
    }

    /// Whether the configured endpoint is plain HTTP. Insecure requests are
    /// blocked outright on some networks, so error hints mention it.
    pub fn insecure_endpoint(&self) -> bool {
        self.base_url.starts_with("http://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_insecure() {
        let config = Config {
            access_key: "key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        assert!(config.insecure_endpoint());
    }

    #[test]
    fn test_https_endpoint_is_not_insecure() {
        let config = Config {
            access_key: "key".to_string(),
            base_url: "https://api.mediastack.com/v1/news".to_string(),
        };
        assert!(!config.insecure_endpoint());
    }
}
