//! Suggestions from an OpenAI-compatible chat completions API.

use futures::future::BoxFuture;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::AirportCode;

use super::parse::{MAX_SUGGESTIONS, parse_suggestions};
use super::{SuggestError, Suggester, Suggestion};

/// Default base URL for the chat completions API.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const USER_PROMPT: &str = "Generate 3 interesting flight routes with compelling reasons for travel, \
considering factors like cultural experiences, business opportunities, or unique attractions.";

/// Configuration for the chat suggestion client.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Bearer token for the API
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SuggestConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Suggester backed by a chat completions endpoint.
///
/// The prompt lists the airport codes the model may use. Whatever codes
/// come back are passed through as-is.
#[derive(Debug, Clone)]
pub struct ChatSuggester {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    airport_codes: Vec<AirportCode>,
}

impl ChatSuggester {
    /// Create a new client that may suggest any of `airport_codes`.
    pub fn new(config: SuggestConfig, airport_codes: Vec<AirportCode>) -> Result<Self, SuggestError> {
        let mut headers = HeaderMap::new();

        let auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
            SuggestError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            model: config.model,
            temperature: config.temperature,
            airport_codes,
        })
    }

    /// System prompt restricting the model to known codes.
    fn system_prompt(&self) -> String {
        let codes: Vec<&str> = self.airport_codes.iter().map(|c| c.as_str()).collect();
        format!(
            "You are a travel expert. Generate 3 flight route suggestions with reasons why \
             someone might want to take this route. Only use airport codes from this list: {}. \
             Include a mix of direct and multi-stop routes.",
            codes.join(", ")
        )
    }

    /// Ask the model and return its raw reply.
    async fn complete(&self) -> Result<String, SuggestError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.system_prompt(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: USER_PROMPT.to_string(),
                },
            ],
            temperature: self.temperature,
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SuggestError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        extract_content(&body)
    }
}

impl Suggester for ChatSuggester {
    fn suggest(&self) -> BoxFuture<'_, Result<Vec<Suggestion>, SuggestError>> {
        Box::pin(async move {
            let text = self.complete().await?;
            let suggestions = parse_suggestions(&text, MAX_SUGGESTIONS);
            debug!(count = suggestions.len(), "parsed route suggestions");
            Ok(suggestions)
        })
    }
}

/// Pull the first choice's text out of a chat completions response body.
fn extract_content(body: &str) -> Result<String, SuggestError> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| SuggestError::Json {
        message: e.to_string(),
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(SuggestError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::DEFAULT_REASON;

    fn codes() -> Vec<AirportCode> {
        ["DEL", "BOM", "GOI"]
            .iter()
            .map(|c| AirportCode::parse(c).unwrap())
            .collect()
    }

    #[test]
    fn config_defaults() {
        let config = SuggestConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_overrides() {
        let config = SuggestConfig::new("k")
            .with_base_url("http://localhost:8080/v1")
            .with_model("local-model");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "local-model");
    }

    #[test]
    fn system_prompt_lists_codes() {
        let suggester = ChatSuggester::new(SuggestConfig::new("k"), codes()).unwrap();
        assert!(suggester.system_prompt().contains("DEL, BOM, GOI"));
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let err = ChatSuggester::new(SuggestConfig::new("bad\nkey"), codes()).unwrap_err();
        assert!(matches!(err, SuggestError::Api { status: 0, .. }));
    }

    #[test]
    fn extract_first_choice() {
        let body = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "DEL to GOI: Beaches" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }"#;
        assert_eq!(extract_content(body).unwrap(), "DEL to GOI: Beaches");
    }

    #[test]
    fn extract_empty_or_missing_content() {
        let body = r#"{ "choices": [] }"#;
        assert!(matches!(extract_content(body), Err(SuggestError::EmptyResponse)));

        let body = r#"{ "choices": [ { "message": { "content": null } } ] }"#;
        assert!(matches!(extract_content(body), Err(SuggestError::EmptyResponse)));

        let body = r#"{ "choices": [ { "message": { "content": "  " } } ] }"#;
        assert!(matches!(extract_content(body), Err(SuggestError::EmptyResponse)));
    }

    /// Serve `status` and `body` for every chat completions request.
    async fn serve_completions(status: axum::http::StatusCode, body: &'static str) -> String {
        let app = axum::Router::new().route(
            "/chat/completions",
            axum::routing::post(move || async move { (status, body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn suggester_for(status: axum::http::StatusCode, body: &'static str) -> ChatSuggester {
        let base_url = serve_completions(status, body).await;
        ChatSuggester::new(SuggestConfig::new("k").with_base_url(base_url), codes()).unwrap()
    }

    #[tokio::test]
    async fn rejected_key_is_unauthorized() {
        for status in [axum::http::StatusCode::UNAUTHORIZED, axum::http::StatusCode::FORBIDDEN] {
            let suggester = suggester_for(status, "no").await;
            assert!(matches!(suggester.suggest().await, Err(SuggestError::Unauthorized)));
        }
    }

    #[tokio::test]
    async fn other_failures_keep_status_and_body() {
        let suggester = suggester_for(axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down").await;

        match suggester.suggest().await {
            Err(SuggestError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_reply_is_parsed() {
        let body = r#"{ "choices": [ { "message": { "content": "1. DEL to GOI: Beaches\n2. BOM - DEL" } } ] }"#;
        let suggester = suggester_for(axum::http::StatusCode::OK, body).await;

        let suggestions = suggester.suggest().await.unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].to.as_str(), "GOI");
        assert_eq!(suggestions[0].reason, "Beaches");
        assert_eq!(suggestions[1].reason, DEFAULT_REASON);
    }

    #[test]
    fn extract_malformed_body() {
        assert!(matches!(
            extract_content("not json"),
            Err(SuggestError::Json { .. })
        ));
    }
}
