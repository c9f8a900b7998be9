//! Handler for the Slack webhook ingress.
//!
//! One endpoint accepts form-encoded slash commands and JSON Events API
//! payloads. Requests are signature-checked before any body inspection.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{error, info, warn};

use super::classify::{Payload, classify};
use super::helpers::{err_response, ok_ephemeral, ok_in_channel, ok_json, ok_message, plain_text};
use super::normalize::{self, EventOutcome, SlashOutcome};
use super::parsing::{content_type, get_header_value};
use super::signature;
use super::sqs::{QueueChannel, QueuePublisher};
use crate::core::config::AppConfig;
use crate::core::models::MessageDraft;
use crate::errors::GatewayError;
use crate::slack::command_parser::SlackSlashCommand;
use crate::slack::events::SlackEventEnvelope;

const USAGE_TEXT: &str = "Usage: /zara <your prompt>";

/// Handle a Slack webhook request (slash command or Events API callback).
pub async fn handle_slack_webhook(
    config: &AppConfig,
    channel: Arc<dyn QueueChannel>,
    headers: &Value,
    body: Option<&str>,
) -> Value {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return err_response(400, &GatewayError::MissingBody.to_string());
    };

    // Slash commands included: a signature failure is never surfaced as a
    // friendly ephemeral message.
    if let Err(e) = check_signature(config, headers, body) {
        error!("Slack signature verification failed: {}", e);
        return err_response(401, &e.to_string());
    }

    match classify(body, content_type(headers)) {
        Ok(Payload::UrlVerification { challenge }) => {
            info!("URL verification challenge received");
            plain_text(&challenge)
        }
        Ok(Payload::SlashCommand(command)) => handle_slash(config, channel, &command).await,
        Ok(Payload::EventCallback(envelope)) => handle_event(config, channel, &envelope).await,
        // Decodable JSON of an unsupported shape gets a safe acknowledge so
        // Slack does not retry the delivery.
        Ok(Payload::GenericPrompt(_)) => ok_message("Unsupported payload type"),
        Err(e) => err_response(400, &e.to_string()),
    }
}

fn check_signature(
    config: &AppConfig,
    headers: &Value,
    body: &str,
) -> Result<(), GatewayError> {
    let Some(secret) = config.slack_signing_secret.as_deref() else {
        if config.allow_unsigned_webhooks {
            warn!("SLACK_SIGNING_SECRET not set; accepting unsigned webhook");
            return Ok(());
        }
        error!("SLACK_SIGNING_SECRET not set and unsigned webhooks are not allowed");
        return Err(GatewayError::SignatureInvalid);
    };

    let Some(provided) = get_header_value(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(GatewayError::SignatureInvalid);
    };
    let Some(timestamp) = get_header_value(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(GatewayError::SignatureInvalid);
    };

    signature::verify_slack_signature(secret, timestamp, body, provided)
}

async fn handle_slash(
    config: &AppConfig,
    channel: Arc<dyn QueueChannel>,
    command: &SlackSlashCommand,
) -> Value {
    let draft = match normalize::slash_outcome(command) {
        SlashOutcome::Usage => return ok_ephemeral(USAGE_TEXT),
        SlashOutcome::Draft(draft) => draft,
    };

    let prompt = draft.prompt.clone();
    let extra = [("channel", command.channel_id.clone())];

    // Slack renders non-200 responses as a delivery failure and retries, so
    // queue errors on this path answer 200 with an ephemeral error text.
    match publish(config, channel, draft, &extra).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "Slash command queued");
            ok_in_channel(&format!("Processing your request...\n> {prompt}"))
        }
        Err(e) => {
            error!("Failed to queue slash command: {}", e);
            ok_ephemeral(":x: Error: failed to queue your request. Please try again later.")
        }
    }
}

async fn handle_event(
    config: &AppConfig,
    channel: Arc<dyn QueueChannel>,
    envelope: &SlackEventEnvelope,
) -> Value {
    let draft = match normalize::event_outcome(envelope) {
        EventOutcome::Ignored(reason) => {
            info!(reason = %reason, "Event callback ignored");
            return ok_message(&reason);
        }
        EventOutcome::Draft(draft) => draft,
    };

    let event_channel = draft
        .metadata
        .get("channel")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let extra = [("channel", event_channel)];

    match publish(config, channel, draft, &extra).await {
        Ok(message_id) => {
            info!(message_id = %message_id, "Slack event queued");
            ok_json(&json!({ "message_id": message_id, "status": "queued" }))
        }
        Err(e) => {
            error!("Failed to queue Slack event: {}", e);
            err_response(500, &e.to_string())
        }
    }
}

async fn publish(
    config: &AppConfig,
    channel: Arc<dyn QueueChannel>,
    draft: MessageDraft,
    extra: &[(&str, String)],
) -> Result<String, GatewayError> {
    let publisher = QueuePublisher::from_config(config, channel)?;
    let receipt = publisher.publish(draft, extra).await?;
    Ok(receipt.message_id)
}
