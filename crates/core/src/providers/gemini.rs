use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::insight::GenerationRequest;
use crate::models::settings::Settings;
use super::traits::InsightProvider;

const PROVIDER_NAME: &str = "Gemini";

/// Google Gemini `generateContent` provider.
///
/// - **Auth**: API key in the `x-goog-api-key` header (never in the URL).
/// - **Endpoint**: `POST {base}/models/{model}:generateContent`
/// - **Output**: text parts of the first candidate, concatenated.
///
/// Without a key every call fails with `CoreError::MissingApiKey`, which the
/// insight generator turns into its fallback text like any other failure.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, Settings::default().api_base_url)
    }

    /// Point the provider at a different API root (proxies, test servers).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_base_url(settings.api_key.clone(), settings.api_base_url.clone())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL for a `generateContent` call.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    /// JSON body for a `generateContent` call.
    pub fn request_body(request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }

    /// Extract the generated text from a response body.
    ///
    /// A well-formed response without candidates or text yields an empty
    /// string; a body that is not a `generateContent` response is an error.
    pub fn parse_response(body: &str) -> Result<String, CoreError> {
        let resp: GenerateContentResponse = serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse response: {e}"),
        })?;

        let text = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();
        Ok(text)
    }
}

// ── Gemini API wire types ───────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl InsightProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingApiKey(PROVIDER_NAME.into()))?;

        let resp = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(request))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message,
            });
        }

        Self::parse_response(&body)
    }
}
