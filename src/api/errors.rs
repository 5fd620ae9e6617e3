use thiserror::Error;

/// Errors from the Responses API dispatch.
///
/// Maps the HTTP failure modes that deserve a dedicated hint for the
/// user; everything else stays generic.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 from the service
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// 429 from the service
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// 404 from the service, usually missing model access
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Any other non-success status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport failure or unreadable response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Extra human-readable line printed after the generic failure
    /// message, for the statuses worth a remediation hint.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ApiError::AuthFailed(_) => {
                Some("Invalid API key. Please check your OpenAI API key.")
            }
            ApiError::RateLimited(_) => {
                Some("Rate limit exceeded. Please try again later.")
            }
            ApiError::ModelNotFound(_) => {
                Some("Model not found. Please check if you have access to the o3 model.")
            }
            ApiError::Api { .. } | ApiError::Network(_) => None,
        }
    }
}
