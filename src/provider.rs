use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::config::{AiProvider, ProviderConfig};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{provider} is unavailable: {detail}")]
    Unavailable { provider: String, detail: String },
    #[error("{provider} rejected the API credentials: {detail}")]
    AuthFailed { provider: String, detail: String },
    #[error("{provider} quota or rate limit exceeded: {detail}")]
    QuotaExceeded { provider: String, detail: String },
}

impl ProviderError {
    fn from_status(provider: &str, status: StatusCode, body: String) -> Self {
        let provider = provider.to_string();
        let detail = format!("HTTP {} - {}", status, body);
        match status.as_u16() {
            401 | 403 => ProviderError::AuthFailed { provider, detail },
            402 | 429 => ProviderError::QuotaExceeded { provider, detail },
            _ => ProviderError::Unavailable { provider, detail },
        }
    }

    fn unavailable(provider: &str, detail: impl Into<String>) -> Self {
        ProviderError::Unavailable {
            provider: provider.to_string(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A hosted text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}

/// Builds the generator selected by configuration. `AiProvider::None` yields no
/// generator, leaving the advisor on templated reviews.
pub fn build_provider(config: &ProviderConfig) -> anyhow::Result<Option<Arc<dyn TextGenerator>>> {
    let api_key = || {
        config
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("{:?} provider needs an API key", config.provider))
    };

    let client = Client::builder().timeout(config.timeout).build()?;

    let provider: Option<Arc<dyn TextGenerator>> = match config.provider {
        AiProvider::OpenAI => Some(Arc::new(OpenAiCompatible::new(
            "OpenAI",
            client,
            OPENAI_BASE_URL,
            api_key()?,
            config.model.clone(),
        ))),
        AiProvider::Groq => Some(Arc::new(OpenAiCompatible::new(
            "Groq",
            client,
            GROQ_BASE_URL,
            api_key()?,
            config.model.clone(),
        ))),
        AiProvider::Gemini => Some(Arc::new(GeminiClient::new(
            client,
            GEMINI_BASE_URL,
            api_key()?,
            config.model.clone(),
        ))),
        AiProvider::None => None,
    };

    if let Some(p) = &provider {
        tracing::info!(provider = p.name(), model = %config.model, "text generation provider ready");
    } else {
        tracing::info!("no text generation provider configured, using templated reviews");
    }

    Ok(provider)
}

fn redact(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        text.to_string()
    } else {
        text.replace(secret, "***")
    }
}

// OpenAI-style chat completions, shared by OpenAI and Groq.

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

pub struct OpenAiCompatible {
    name: &'static str,
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatible {
    pub fn new(
        name: &'static str,
        client: Client,
        base_url: &str,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            name,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatible {
    fn name(&self) -> &str {
        self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::unavailable(self.name, redact(&e.to_string(), &self.api_key)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                self.name,
                status,
                redact(&error_text, &self.api_key),
            ));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::unavailable(self.name, format!("malformed response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::unavailable(self.name, "response contained no choices"))
    }
}

// Gemini generateContent.

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: Client, base_url: &str, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::unavailable("Gemini", redact(&e.to_string(), &self.api_key)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(
                "Gemini",
                status,
                redact(&error_text, &self.api_key),
            ));
        }

        let generated: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::unavailable("Gemini", format!("malformed response: {}", e)))?;

        let text: String = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::unavailable("Gemini", "response contained no candidates"));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_classification() {
        let auth = ProviderError::from_status("OpenAI", StatusCode::UNAUTHORIZED, "bad key".into());
        assert!(matches!(auth, ProviderError::AuthFailed { .. }));

        let forbidden = ProviderError::from_status("Groq", StatusCode::FORBIDDEN, String::new());
        assert!(matches!(forbidden, ProviderError::AuthFailed { .. }));

        let quota = ProviderError::from_status("OpenAI", StatusCode::TOO_MANY_REQUESTS, "slow down".into());
        assert!(matches!(quota, ProviderError::QuotaExceeded { .. }));

        let payment = ProviderError::from_status("OpenAI", StatusCode::PAYMENT_REQUIRED, String::new());
        assert!(matches!(payment, ProviderError::QuotaExceeded { .. }));

        let down = ProviderError::from_status("Gemini", StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(down, ProviderError::Unavailable { .. }));
    }

    #[test]
    fn test_redact_hides_secret() {
        assert_eq!(
            redact("https://host/models/x?key=abc123 failed", "abc123"),
            "https://host/models/x?key=*** failed"
        );
        assert_eq!(redact("nothing here", ""), "nothing here");
    }

    #[test]
    fn test_gemini_request_uses_camel_case() {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: "hi" }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: 150,
                temperature: 0.5,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 150);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_build_provider_selection() {
        let none = build_provider(&ProviderConfig::default()).unwrap();
        assert!(none.is_none());

        let groq = build_provider(&ProviderConfig {
            provider: AiProvider::Groq,
            api_key: Some("gsk-test".to_string()),
            model: "llama-3.1-8b-instant".to_string(),
            timeout: Duration::from_secs(5),
            ..ProviderConfig::default()
        })
        .unwrap()
        .unwrap();
        assert_eq!(groq.name(), "Groq");

        let missing_key = build_provider(&ProviderConfig {
            provider: AiProvider::Gemini,
            ..ProviderConfig::default()
        });
        assert!(missing_key.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let provider = OpenAiCompatible::new(
            "OpenAI",
            client,
            "http://127.0.0.1:9/v1",
            "sk-test".to_string(),
            "gpt-3.5-turbo".to_string(),
        );

        let err = provider
            .generate(&GenerationRequest {
                prompt: "hello".to_string(),
                max_tokens: 10,
                temperature: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Unavailable { .. }));
        assert!(!err.to_string().contains("sk-test"));
    }
}
