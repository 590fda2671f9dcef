use thiserror::Error;

/// Shown for every provider and response-shape failure.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate profile. The model may be unavailable or the request was invalid.";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("API key is not configured (set GEMINI_API_KEY)")]
    MissingCredential,

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("request to provider failed: {0}")]
    Request(String),

    #[error("provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),
}

impl GeminiError {
    /// The single human-readable message that replaces the result area.
    pub fn user_message(&self) -> String {
        match self {
            GeminiError::MissingCredential => {
                "API key is not configured. Set GEMINI_API_KEY and try again.".to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
