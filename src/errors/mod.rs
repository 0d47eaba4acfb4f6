use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsdeskError {
    // Configuration errors
    #[error("API key not set. Set MEDIASTACK_ACCESS_KEY to your Mediastack access key.")]
    MissingAccessKey,

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("API Error ({code}): {message}")]
    Api { code: String, message: String },

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Marker for a fetch cycle whose failure was already reported
    // through the output surfaces
    #[error("news fetch failed")]
    FetchFailed,
}

impl NewsdeskError {
    /// Generic API error for a success response whose body is not the
    /// expected `{data: [...]}` shape.
    pub fn invalid_response() -> Self {
        NewsdeskError::Api {
            code: "invalid_response".to_string(),
            message: "Unexpected response from the news API.".to_string(),
        }
    }
}

pub type NewsdeskResult<T> = Result<T, NewsdeskError>;
