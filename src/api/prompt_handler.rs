//! Handler for the generic prompt ingress.
//!
//! Accepts a JSON body from third-party applications, validates it against
//! the prompt contract, and queues a canonical message.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{error, info};

use super::classify::{Payload, classify};
use super::helpers::{accepted, err_response};
use super::normalize;
use super::sqs::{QueueChannel, QueuePublisher};
use crate::core::config::AppConfig;
use crate::core::models::PromptRequest;
use crate::errors::GatewayError;

/// Handle a generic prompt request.
///
/// Success is a 202 with the generated `message_id` and the queue's own id
/// for correlation. Malformed input maps to 400; a missing or unreachable
/// queue maps to 500 so the caller sees "service not configured" rather
/// than a silent drop.
pub async fn handle_prompt(
    config: &AppConfig,
    channel: Arc<dyn QueueChannel>,
    body: Option<&str>,
    content_type: Option<&str>,
) -> Value {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return err_response(400, &GatewayError::MissingBody.to_string());
    };

    let request = match classify(body, content_type) {
        Ok(Payload::GenericPrompt(value)) => match PromptRequest::from_value(value) {
            Ok(request) => request,
            Err(e) => return err_response(400, &e.to_string()),
        },
        Ok(_) => {
            return err_response(
                400,
                &GatewayError::UnrecognizedPayload(
                    "expected a JSON prompt request".to_string(),
                )
                .to_string(),
            );
        }
        Err(e) => return err_response(400, &e.to_string()),
    };

    let source = request.source.clone();
    let draft = normalize::prompt_draft(request);

    let publisher = match QueuePublisher::from_config(config, channel) {
        Ok(publisher) => publisher,
        Err(e) => {
            error!("Queue not configured: {}", e);
            return err_response(500, &e.to_string());
        }
    };

    match publisher.publish(draft, &[]).await {
        Ok(receipt) => {
            info!(message_id = %receipt.message_id, source = %source, "Prompt queued");
            accepted(&json!({
                "message_id": receipt.message_id,
                "queue_message_id": receipt.queue_message_id,
                "status": "queued",
            }))
        }
        Err(e) => {
            error!("Failed to queue prompt: {}", e);
            err_response(500, &e.to_string())
        }
    }
}
