use coderev_core::prompt::{build_user_message, REVIEW_SYSTEM_PROMPT};
use coderev_core::types::{first_completion_text, ChatMessage, ChatRequest, ChatResponse};

use crate::error::Error;

/// Connection settings for the upstream completion API.
///
/// Every field doubles as an environment variable so the relay can be
/// configured at process start without flags.
#[derive(Debug, Clone, clap::Args)]
pub struct UpstreamOptions {
    /// Base URL of the upstream completion API
    #[clap(long, env = "CODEREV_API_URL", default_value = "https://api.aimlapi.com/v1")]
    pub api_url: String,

    /// API key for the upstream completion API
    #[clap(long, env = "CODEREV_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model identifier sent with every request
    #[clap(long, env = "CODEREV_MODEL", default_value = "mistralai/Mixtral-8x7B-Instruct-v0.1")]
    pub model: String,

    /// Output token budget for the model's answer
    #[clap(long, env = "CODEREV_MAX_TOKENS", default_value = "800")]
    pub max_tokens: u32,
}

/// Client for the upstream chat-completion endpoint.
///
/// One synchronous (awaited) call per review; no retries, no timeout beyond
/// the reqwest default.
pub struct Upstream {
    client: reqwest::Client,
    options: UpstreamOptions,
}

impl Upstream {
    pub fn new(options: UpstreamOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    /// Shape the chat-completion request for a snippet.
    fn build_request(&self, code: &str) -> ChatRequest {
        ChatRequest {
            model: self.options.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: REVIEW_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_user_message(code),
                },
            ],
            max_tokens: self.options.max_tokens,
        }
    }

    /// Send one review request and return the model's raw answer, trimmed.
    pub async fn complete(&self, code: &str) -> Result<String, Error> {
        let url = format!("{}/chat/completions", self.options.api_url);
        let request = self.build_request(code);

        log::debug!("Calling {} with model {}", url, self.options.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.options.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Upstream answered {status}");
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Generic(format!("Failed to parse completion response: {e}")))?;

        first_completion_text(&completion)
            .ok_or_else(|| Error::Generic("No choices in completion response".to_string()))
    }
}
