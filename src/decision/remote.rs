use super::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Name of the single tool the model is forced to call.
pub const TOOL: &str = "take_action";
const API_VERSION: &str = "2023-06-01";
const SYSTEM: &str = "You are a No-Limit Hold'em player. \
Answer every request by calling the take_action tool exactly once.";

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub system: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            api_key: None,
            model: "claude-3-5-sonnet-latest".to_string(),
            max_tokens: 1024,
            temperature: 1.0,
            timeout_secs: 30,
            system: SYSTEM.to_string(),
        }
    }
}

/// Decisions from a hosted model behind a messages API with tool use.
///
/// The restricted action schema is sent as the `input_schema` of a forced
/// tool, so a well-behaved model can only answer with a legal shape. The
/// answer is still validated by the caller.
pub struct Remote {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl Remote {
    pub fn new(config: RemoteConfig) -> Result<Self, DecisionError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DecisionError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, DecisionError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            HeaderValue::from_static(API_VERSION),
        );
        if let Some(key) = &self.config.api_key {
            headers.insert(
                HeaderName::from_static("x-api-key"),
                HeaderValue::from_str(key).map_err(|e| DecisionError::Transport(e.to_string()))?,
            );
        }
        Ok(headers)
    }

    fn body(&self, request: &Request) -> Body {
        Body {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: self.config.system.clone(),
            messages: vec![Message {
                role: "user",
                content: request.prompt.clone(),
            }],
            tools: vec![Tool {
                name: TOOL,
                description: "Submit your poker action for this turn.",
                input_schema: request.schema.to_json(),
            }],
            tool_choice: ToolChoice {
                kind: "tool",
                name: TOOL,
            },
        }
    }

    /// Pull the forced tool call's input out of a response body.
    pub fn extract(text: &str) -> Result<Proposal, DecisionError> {
        let envelope = serde_json::from_str::<Envelope>(text)
            .map_err(|e| DecisionError::Protocol(format!("unreadable envelope: {}", e)))?;
        envelope
            .content
            .into_iter()
            .find_map(|block| match block {
                Block::ToolUse { name, input } if name == TOOL => Some(input),
                _ => None,
            })
            .ok_or_else(|| DecisionError::Protocol(format!("no {} call in response", TOOL)))
            .and_then(|input| Protocol::decode(&input))
    }
}

#[async_trait::async_trait]
impl Provider for Remote {
    async fn propose(&mut self, request: &Request) -> Result<Proposal, DecisionError> {
        log::debug!("[remote] {} asks {}", request.player, self.config.model);
        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(self.headers()?)
            .json(&self.body(request))
            .send()
            .await
            .map_err(|e| DecisionError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DecisionError::Transport(format!("HTTP {}: {}", status, text)));
        }
        let text = response
            .text()
            .await
            .map_err(|e| DecisionError::Transport(e.to_string()))?;
        log::trace!("[remote] {} <- {}", request.player, text);
        Self::extract(&text)
    }
}

#[derive(Debug, Serialize)]
struct Body {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
    tools: Vec<Tool>,
    tool_choice: ToolChoice,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    description: &'static str,
    input_schema: Value,
}

#[derive(Debug, Serialize)]
struct ToolChoice {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    content: Vec<Block>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    ToolUse {
        name: String,
        input: Value,
    },
    #[serde(other)]
    Other,
}
