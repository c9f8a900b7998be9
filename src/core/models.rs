use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::GatewayError;

/// Source tag attached to messages originating from Slack webhooks.
pub const SOURCE_SLACK: &str = "slack";

/// External-facing contract of the generic prompt endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct PromptRequest {
    pub prompt: String,
    pub source: String,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl PromptRequest {
    /// Validate a decoded JSON body against the prompt contract.
    ///
    /// Missing or wrong-shaped fields and empty `prompt`/`source` values are
    /// schema violations, distinct from JSON decode errors.
    pub fn from_value(value: Value) -> Result<Self, GatewayError> {
        let request: Self = serde_json::from_value(value)
            .map_err(|e| GatewayError::SchemaValidation(e.to_string()))?;

        if request.prompt.trim().is_empty() {
            return Err(GatewayError::SchemaValidation(
                "field 'prompt' must be a non-empty string".to_string(),
            ));
        }
        if request.source.trim().is_empty() {
            return Err(GatewayError::SchemaValidation(
                "field 'source' must be a non-empty string".to_string(),
            ));
        }

        Ok(request)
    }
}

/// A normalized message that has not been assigned an identity yet.
///
/// Drafts are produced by the normalizer; the queue publisher seals them
/// into a [`QueueMessage`] with a fresh `message_id` and timestamp.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub prompt: String,
    pub source: String,
    pub callback_url: Option<String>,
    pub metadata: Map<String, Value>,
}

/// The canonical message serialized as the SQS payload body.
///
/// Immutable once created; `message_id` is generated exactly once per
/// accepted request and echoed back to the caller for correlation.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueueMessage {
    pub message_id: String,
    pub prompt: String,
    pub source: String,
    pub callback_url: Option<String>,
    pub metadata: Map<String, Value>,
    pub timestamp: String,
}
