//! REST client for the Gemini generateContent API.

use crate::TextDriver;
use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use moniker_error::{GeminiError, GeminiErrorKind, MonikerResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Model used when no override is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for Google's Gemini generateContent endpoint.
///
/// Makes exactly one HTTP request per generation call and maps transport,
/// status, and parse failures into [`GeminiErrorKind`] variants.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client for the given credential and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        let client = Client::new();

        debug!(model = %model, "Created Gemini client");

        Self {
            client,
            api_key: api_key.into(),
            model,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Sends one generateContent request and extracts the candidate text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, the body cannot be parsed, or the response
    /// holds no candidate text.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                model = %self.model,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let content: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            model = %self.model,
            candidates = content.candidates().len(),
            "Received response"
        );

        content
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl TextDriver for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_text(&self, prompt: &str) -> MonikerResult<String> {
        Ok(self.generate_content(prompt).await?)
    }
}
