use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::cli::Level;
use crate::constants::{
    BASE_URL_ENV, DEFAULT_API_BASE_URL, HTTP_REQUEST_TIMEOUT_SECS, SEARCH_MODEL,
    WEB_SEARCH_INSTRUCTIONS,
};

use super::errors::ApiError;
use super::types::{ErrorEnvelope, Reasoning, Response, ResponseRequest, Tool};

/// Client for the hosted Responses API.
///
/// Performs exactly one request per invocation; no retries, no
/// streaming. The API key is held for the Authorization header only and
/// never appears in logs.
pub struct ResponsesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// Custom Debug to avoid exposing the API key
impl std::fmt::Debug for ResponsesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsesClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ResponsesClient {
    /// Create a client against the default endpoint, honoring the
    /// OAI_SEARCH_BASE_URL override from the environment.
    pub fn new(api_key: String) -> Result<Self, ApiError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::with_base_url(api_key, base_url)
    }

    /// Create a client against an explicit endpoint
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
                .build()?,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Send one web-search request and return the aggregated output text.
    pub async fn search(
        &self,
        query: &str,
        reasoning_effort: Level,
        search_context_size: Level,
    ) -> Result<String, ApiError> {
        let request_body = ResponseRequest {
            model: SEARCH_MODEL,
            input: query,
            instructions: WEB_SEARCH_INSTRUCTIONS,
            reasoning: Reasoning {
                effort: reasoning_effort,
            },
            tools: vec![Tool::WebSearchPreview {
                search_context_size,
            }],
        };

        let url = format!("{}/responses", self.base_url);
        debug!(model = SEARCH_MODEL, %url, "dispatching web search request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status, body));
        }

        let response: Response = response.json().await?;
        Ok(response.output_text())
    }

    /// Map a non-success status to a categorized error.
    ///
    /// The service wraps failures in an error envelope; fall back to the
    /// raw body when it does not parse.
    fn map_error(status: StatusCode, body: String) -> ApiError {
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ApiError::AuthFailed(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(message),
            StatusCode::NOT_FOUND => ApiError::ModelNotFound(message),
            _ => ApiError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}
