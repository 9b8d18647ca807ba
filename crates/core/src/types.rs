use serde::{Deserialize, Serialize};

/// A review request as received by the HTTP relay.
///
/// `code` defaults to empty when the field is missing so the relay can
/// answer with its fixed client error instead of a serde rejection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub code: String,
    /// Advisory language hint. Accepted and logged, never sent upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A successful review response: the model's raw answer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

/// Chat-completion request body for the upstream API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat-completion response body from the upstream API.
///
/// Only the fields the relay reads are modeled; the upstream sends more.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Pick the text of the first completion, trimmed.
///
/// Returns `None` when the upstream answered with no choices at all.
pub fn first_completion_text(response: &ChatResponse) -> Option<String> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_request_with_language_hint() {
        let request: ReviewRequest =
            serde_json::from_str(r#"{"code": "def foo(): pass", "language": "python"}"#).unwrap();
        assert_eq!(request.code, "def foo(): pass");
        assert_eq!(request.language.as_deref(), Some("python"));
    }

    #[test]
    fn test_review_request_language_is_optional() {
        let request: ReviewRequest = serde_json::from_str(r#"{"code": "x = 1"}"#).unwrap();
        assert_eq!(request.code, "x = 1");
        assert!(request.language.is_none());
    }

    #[test]
    fn test_review_request_missing_code_defaults_to_empty() {
        let request: ReviewRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.code.is_empty());
    }

    #[test]
    fn test_review_response_shape() {
        let json = serde_json::to_string(&ReviewResponse {
            review: "**Suggestions:**\nnone".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"review":"**Suggestions:**\nnone"}"#);
    }

    #[test]
    fn test_chat_response_deserializes_upstream_shape() {
        let json = r#"{
            "id": "cmpl-42",
            "model": "mistralai/Mixtral-8x7B-Instruct-v0.1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "  looks fine  "},
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(first_completion_text(&response).as_deref(), Some("looks fine"));
    }

    #[test]
    fn test_first_completion_text_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(first_completion_text(&response), None);
    }

    #[test]
    fn test_chat_request_serializes_bounded_budget() {
        let request = ChatRequest {
            model: "test-model".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Code:\n\nx = 1".to_string(),
            }],
            max_tokens: 800,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""max_tokens":800"#));
        assert!(json.contains(r#""model":"test-model""#));
    }
}
