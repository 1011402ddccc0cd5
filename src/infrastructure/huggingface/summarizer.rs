use async_trait::async_trait;

use crate::config::SummarizerConfig;
use crate::domain::summary::placeholder;
use crate::domain::{Summarizer, SummarizerResponse};
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Generation bounds and input budget for summarization requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationBounds {
    pub min_length: u32,
    pub max_length: u32,
    pub max_input_chars: usize,
}

impl Default for GenerationBounds {
    fn default() -> Self {
        Self {
            min_length: 30,
            max_length: 180,
            max_input_chars: 3000,
        }
    }
}

/// Hugging Face hosted inference summarizer
#[derive(Debug)]
pub struct HuggingFaceSummarizer<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    model_url: String,
    bounds: GenerationBounds,
}

impl<C: HttpClientTrait> HuggingFaceSummarizer<C> {
    pub fn new(client: C, api_token: impl Into<String>) -> Self {
        Self::with_base_url(client, api_token, DEFAULT_BASE_URL, DEFAULT_MODEL)
    }

    pub fn with_base_url(
        client: C,
        api_token: impl Into<String>,
        base_url: impl Into<String>,
        model: impl AsRef<str>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_token.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model_url = format!("{}/models/{}", base_url, model.as_ref());

        Self {
            client,
            auth_header,
            model_url,
            bounds: GenerationBounds::default(),
        }
    }

    pub fn from_config(client: C, config: &SummarizerConfig) -> Self {
        Self::with_base_url(client, config.token.clone(), config.base_url.clone(), &config.model)
            .with_bounds(GenerationBounds {
                min_length: config.min_length,
                max_length: config.max_length,
                max_input_chars: config.max_input_chars,
            })
    }

    pub fn with_bounds(mut self, bounds: GenerationBounds) -> Self {
        self.bounds = bounds;
        self
    }

    fn build_request(&self, text: &str) -> serde_json::Value {
        serde_json::json!({
            "inputs": text,
            "parameters": {
                "max_length": self.bounds.max_length,
                "min_length": self.bounds.min_length,
            }
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    /// Keeps the first `max_input_chars` characters
    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.bounds.max_input_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> Summarizer for HuggingFaceSummarizer<C> {
    async fn summarize(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return placeholder::NO_CONTENT.to_string();
        }

        let input = self.truncate(text);
        let body = self.build_request(input);

        let response = match self
            .client
            .post_json(&self.model_url, self.headers(), &body)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %self.model_url, error = %e, "Summarizer request failed");
                return placeholder::REQUEST_FAILED.to_string();
            }
        };

        let parsed = SummarizerResponse::parse(&response.body);

        if !response.is_success() && !parsed.is_error() {
            tracing::warn!(status = response.status, "Summarizer returned non-success status");
            return placeholder::summarizer_status(response.status);
        }

        if parsed.is_error() {
            tracing::warn!(status = response.status, "Summarizer reported an error");
        }

        parsed.into_synopsis()
    }

    fn summarizer_name(&self) -> &'static str {
        "huggingface"
    }
}
