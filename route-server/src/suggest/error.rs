//! Suggestion generator error types.

/// Errors that can occur while generating route suggestions.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check OPENAI_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The model replied without any content
    #[error("suggestion response was empty")]
    EmptyResponse,
}
