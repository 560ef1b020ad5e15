use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use serde_json::Value;

use super::analysis::{AnalysisError, GenerativeBackend};
use crate::config;

/// `generateContent` over fetch, raced against a timer so a stalled request
/// still settles.
pub struct GeminiBackend {
    api_base: String,
    api_key: Option<String>,
    timeout_ms: u32,
}

impl GeminiBackend {
    pub fn from_config() -> Self {
        Self {
            api_base: config::gemini_api_base().to_string(),
            api_key: config::gemini_api_key().map(str::to_string),
            timeout_ms: config::ANALYSIS_TIMEOUT_MS,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            model
        )
    }
}

impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, model: &str, body: &Value) -> Result<String, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;

        let endpoint = self.endpoint(model);
        debug!("POST {}", endpoint);
        let request = Request::post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(body)
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        let send = Box::pin(request.send());
        let deadline = Box::pin(TimeoutFuture::new(self.timeout_ms));
        let response = match select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| AnalysisError::Request(e.to_string()))?,
            Either::Right(_) => return Err(AnalysisError::Timeout(self.timeout_ms)),
        };

        if !response.ok() {
            return Err(AnalysisError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(api_base: &str, api_key: Option<&str>) -> GeminiBackend {
        GeminiBackend {
            api_base: api_base.to_string(),
            api_key: api_key.map(str::to_string),
            timeout_ms: 10,
        }
    }

    #[test]
    fn endpoint_targets_generate_content_for_the_model() {
        let backend = backend("https://generativelanguage.googleapis.com/v1beta/", Some("k"));
        assert_eq!(
            backend.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let backend = backend("http://localhost:9", None);
        let result = backend
            .generate("gemini-3-flash-preview", &serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(AnalysisError::MissingApiKey)));
    }
}
