//! Gemini backend for [`InsightProvider`].
//!
//! Talks to the Generative Language REST API
//! (`v1beta/models/<model>:generateContent`). Passage commentary uses the
//! fast model with thinking disabled; theological questions get the
//! deeper model with a generous thinking budget.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::{InsightProvider, build_insight_prompt, build_question_prompt};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model for passage commentary.
const INSIGHT_MODEL: &str = "gemini-3-flash-preview";
/// Model for theological questions.
const QUESTION_MODEL: &str = "gemini-3-pro-preview";

/// Thinking budget for theological questions.
const QUESTION_THINKING_BUDGET: u32 = 15_000;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "thinkingConfig")]
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: u32,
}

/// Client for the Generative Language API.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the API key.
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    /// Client against the public API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Send a prompt to the given model and return the generated text.
    async fn generate(&self, model: &str, prompt: &str, thinking_budget: u32) -> Result<String> {
        let url = format!("{}/models/{model}:generateContent", self.base_url);
        debug!(model, "requesting generated content");

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig {
                    thinking_budget,
                },
            },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("generation API request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("generation API returned {status}: {body}");
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .context("generation API returned invalid JSON")?;
        extract_text(&payload)
    }
}

#[async_trait]
impl InsightProvider for GeminiClient {
    async fn passage_insight(&self, passage: &str, context: Option<&str>) -> Result<String> {
        let prompt = build_insight_prompt(passage, context);
        self.generate(INSIGHT_MODEL, &prompt, 0).await
    }

    async fn answer_question(&self, question: &str) -> Result<String> {
        let prompt = build_question_prompt(question);
        self.generate(QUESTION_MODEL, &prompt, QUESTION_THINKING_BUDGET)
            .await
    }
}

/// Pull the generated text out of a `generateContent` response.
///
/// Concatenates the text parts of the first candidate.
fn extract_text(payload: &serde_json::Value) -> Result<String> {
    let parts = payload
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .context("generation API response has no candidates")?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        bail!("generation API response contained no text parts");
    }

    Ok(text)
}
