use serde_json::Value;
use tracing::debug;

use crate::errors::GatewayError;
use crate::slack::command_parser::{SlackSlashCommand, parse_form_data};
use crate::slack::events::SlackEventEnvelope;

/// Closed set of payload shapes the gateway accepts.
///
/// Produced once by [`classify`] and pattern-matched exhaustively by the
/// handlers; the body is never re-inspected downstream.
#[derive(Debug)]
pub enum Payload {
    /// Decodable JSON that is neither Events API shape; a candidate for the
    /// generic prompt contract, validated by the prompt ingress.
    GenericPrompt(Value),
    SlashCommand(SlackSlashCommand),
    UrlVerification { challenge: String },
    EventCallback(SlackEventEnvelope),
}

/// Determine which payload shape a raw request body represents.
///
/// An explicit content type wins when the transport provides one: a
/// form-encoded content type is a slash command, a JSON content type goes
/// straight to JSON decoding. Without a usable content type the body falls
/// back to the substring heuristic (`command=` and `text=` both present),
/// checked before any JSON decoding is attempted.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidJson`] when a non-form body fails to
/// decode, and [`GatewayError::SchemaValidation`] when a recognized shape
/// cannot be deserialized into its structure.
pub fn classify(raw_body: &str, content_type: Option<&str>) -> Result<Payload, GatewayError> {
    let is_form = match content_type {
        Some(ct) if ct.contains("application/x-www-form-urlencoded") => true,
        Some(ct) if ct.contains("application/json") => false,
        _ => raw_body.contains("command=") && raw_body.contains("text="),
    };

    if is_form {
        let command = parse_form_data(raw_body).map_err(GatewayError::SchemaValidation)?;
        debug!(command = %command.command, "Classified body as slash command");
        return Ok(Payload::SlashCommand(command));
    }

    let value: Value = serde_json::from_str(raw_body)?;

    match value.get("type").and_then(Value::as_str) {
        Some("url_verification") => {
            let challenge = value
                .get("challenge")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Ok(Payload::UrlVerification { challenge })
        }
        Some("event_callback") => {
            let envelope: SlackEventEnvelope = serde_json::from_value(value)
                .map_err(|e| GatewayError::SchemaValidation(e.to_string()))?;
            Ok(Payload::EventCallback(envelope))
        }
        _ => Ok(Payload::GenericPrompt(value)),
    }
}
