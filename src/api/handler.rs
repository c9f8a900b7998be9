//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Liveness probes (`/health`)
//! - Generic prompt requests (`/prompt`, delegated to `prompt_handler`)
//! - Slack webhooks (everything else, delegated to `slack_handler`)

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use super::{health, parsing, prompt_handler, slack_handler, sqs};
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Routes requests to specialized handlers based on path. Every pipeline
/// error is converted into a transport response here or below; the only
/// errors propagated to the runtime are its own.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env();
    let payload = event.payload;

    let path = payload
        .get("rawPath")
        .and_then(Value::as_str)
        .or_else(|| payload.get("path").and_then(Value::as_str))
        .unwrap_or_default();
    info!(raw_path = %path, "Request path");

    if path.ends_with("/health") {
        return Ok(health::handle_health());
    }

    let headers = payload.get("headers").cloned().unwrap_or_else(|| json!({}));
    let body = parsing::extract_body(&payload);

    // Created once per process, reused across invocations.
    let channel = sqs::shared_channel().await;

    if path.ends_with("/prompt") {
        let content_type = parsing::content_type(&headers);
        return Ok(prompt_handler::handle_prompt(&config, channel, body, content_type).await);
    }

    Ok(slack_handler::handle_slack_webhook(&config, channel, &headers, body).await)
}
