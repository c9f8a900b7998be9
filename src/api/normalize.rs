use serde_json::{Map, json};

use crate::core::models::{MessageDraft, PromptRequest, SOURCE_SLACK};
use crate::slack::command_parser::SlackSlashCommand;
use crate::slack::events::{SlackEventEnvelope, strip_mention};

/// Outcome of normalizing a slash command.
#[derive(Debug)]
pub enum SlashOutcome {
    /// Empty command text: answer with the usage hint, queue nothing.
    Usage,
    Draft(MessageDraft),
}

/// Outcome of normalizing an event callback.
#[derive(Debug)]
pub enum EventOutcome {
    /// Not an error: the event is deliberately dropped, with a reason the
    /// handler echoes back in its acknowledgement.
    Ignored(String),
    Draft(MessageDraft),
}

/// Normalize a validated generic prompt request into a draft.
#[must_use]
pub fn prompt_draft(request: PromptRequest) -> MessageDraft {
    MessageDraft {
        prompt: request.prompt,
        source: request.source,
        callback_url: request.callback_url,
        metadata: request.metadata.unwrap_or_default(),
    }
}

/// Normalize a slash command into a draft.
///
/// Slash commands deliver delayed responses through the caller-supplied
/// `response_url`, so that becomes the callback target.
#[must_use]
pub fn slash_outcome(command: &SlackSlashCommand) -> SlashOutcome {
    let text = command.text.trim();
    if text.is_empty() {
        return SlashOutcome::Usage;
    }

    let mut metadata = Map::new();
    metadata.insert("team_id".to_string(), json!(command.team_id));
    metadata.insert("team_domain".to_string(), json!(command.team_domain));
    metadata.insert("channel_id".to_string(), json!(command.channel_id));
    metadata.insert("channel_name".to_string(), json!(command.channel_name));
    metadata.insert("user_id".to_string(), json!(command.user_id));
    metadata.insert("user_name".to_string(), json!(command.user_name));
    metadata.insert("command".to_string(), json!(command.command));
    metadata.insert("response_url".to_string(), json!(command.response_url));
    metadata.insert("trigger_id".to_string(), json!(command.trigger_id));
    metadata.insert("event_type".to_string(), json!("slash_command"));

    let callback_url = if command.response_url.is_empty() {
        None
    } else {
        Some(command.response_url.clone())
    };

    SlashOutcome::Draft(MessageDraft {
        prompt: text.to_string(),
        source: SOURCE_SLACK.to_string(),
        callback_url,
        metadata,
    })
}

/// Normalize an Events API callback into a draft, or drop it.
///
/// Events carrying a bot identifier are discarded so the gateway never
/// re-queues its own bot's output. Event responses are delivered through a
/// separate API call, so drafts from this path carry no callback URL.
#[must_use]
pub fn event_outcome(envelope: &SlackEventEnvelope) -> EventOutcome {
    let Some(event) = envelope.event.as_ref() else {
        return EventOutcome::Ignored("Event callback missing event".to_string());
    };

    if event.bot_id.is_some() || event.subtype.as_deref() == Some("bot_message") {
        return EventOutcome::Ignored("Bot message ignored".to_string());
    }

    if !matches!(event.kind.as_str(), "message" | "app_mention") {
        return EventOutcome::Ignored(format!("Event type '{}' not handled", event.kind));
    }

    let text = strip_mention(event.text.as_deref().unwrap_or_default());
    if text.is_empty() {
        return EventOutcome::Ignored("Empty message ignored".to_string());
    }

    let mut metadata = Map::new();
    metadata.insert("team_id".to_string(), json!(envelope.team_id));
    metadata.insert("channel".to_string(), json!(event.channel));
    metadata.insert("user".to_string(), json!(event.user));
    metadata.insert("ts".to_string(), json!(event.ts));
    metadata.insert("event_ts".to_string(), json!(event.event_ts));
    metadata.insert("event_type".to_string(), json!(event.kind));
    metadata.insert("channel_type".to_string(), json!(event.channel_type));
    metadata.insert("thread_ts".to_string(), json!(event.thread_ts));

    EventOutcome::Draft(MessageDraft {
        prompt: text.to_string(),
        source: SOURCE_SLACK.to_string(),
        callback_url: None,
        metadata,
    })
}
