use serde::Deserialize;

/// Outer envelope of a Slack Events API `event_callback` payload.
#[derive(Debug, Deserialize)]
pub struct SlackEventEnvelope {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub event: Option<SlackEvent>,
}

/// The nested event object of an `event_callback`.
///
/// All fields except `type` are optional; Slack omits most of them for
/// subtypes this gateway ignores anyway.
#[derive(Debug, Deserialize)]
pub struct SlackEvent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub event_ts: Option<String>,
    #[serde(default)]
    pub channel_type: Option<String>,
    #[serde(default)]
    pub thread_ts: Option<String>,
}

/// Strip a leading bot mention of the form `<@UXXXXXXXX>` from message text.
///
/// Returns everything after the first `>` with surrounding whitespace
/// trimmed. A mention with no closing `>` is malformed and the text is left
/// unmodified; text not starting with `<@` is used as-is.
///
/// # Examples
///
/// ```
/// use zara_gateway::slack::events::strip_mention;
///
/// assert_eq!(strip_mention("<@U123ABC> do the thing"), "do the thing");
/// assert_eq!(strip_mention("<@U123ABC"), "<@U123ABC");
/// assert_eq!(strip_mention("plain text"), "plain text");
/// ```
#[must_use]
pub fn strip_mention(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix("<@") {
        if let Some(idx) = rest.find('>') {
            return rest[idx + 1..].trim();
        }
    }
    text
}
