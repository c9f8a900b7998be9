use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structure representing a Slack slash command request.
/// This contains the fields Slack sends when a user invokes a slash command.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SlackSlashCommand {
    pub command: String,
    pub text: String,
    pub user_id: String,
    pub user_name: String,
    pub channel_id: String,
    pub channel_name: String,
    pub team_id: String,
    pub team_domain: String,
    pub response_url: String,
    pub trigger_id: String,
}

/// Decodes URL encoded string using percent_encoding crate
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * `Ok(String)` - The decoded string if successful
/// * `Err(String)` - An error message if decoding fails
///
/// # Examples
///
/// ```
/// use zara_gateway::slack::command_parser::decode_url_component;
///
/// let encoded = "hello%20world";
/// let decoded = decode_url_component(encoded).unwrap();
/// assert_eq!(decoded, "hello world");
///
/// let encoded_plus = "hello+world";
/// let decoded_plus = decode_url_component(encoded_plus).unwrap();
/// assert_eq!(decoded_plus, "hello world");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.replace('+', " "))
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Parses URL-encoded form data into a [`SlackSlashCommand`].
///
/// This is used on the raw body of a Slack slash command request. Fields
/// absent from the form default to empty strings.
///
/// # Examples
///
/// ```
/// use zara_gateway::slack::command_parser::parse_form_data;
///
/// let form_data = "team_id=T123&team_domain=example&\
///                  channel_id=C123&channel_name=general&user_id=U123&\
///                  user_name=username&command=%2Fzara&text=hello+there&\
///                  response_url=https%3A%2F%2Fhooks.slack.com%2F&\
///                  trigger_id=123.456";
///
/// let command = parse_form_data(form_data).unwrap();
/// assert_eq!(command.command, "/zara");
/// assert_eq!(command.text, "hello there");
/// ```
pub fn parse_form_data(form_data: &str) -> Result<SlackSlashCommand, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&') {
        if let Some(idx) = pair.find('=') {
            let key = decode_url_component(&pair[..idx])
                .map_err(|e| format!("Failed to decode key: {e}"))?;

            let value = decode_url_component(&pair[idx + 1..])
                .map_err(|e| format!("Failed to decode value: {e}"))?;

            map.insert(key, value);
        }
    }

    let mut field = |name: &str| map.remove(name).unwrap_or_default();

    Ok(SlackSlashCommand {
        command: field("command"),
        text: field("text"),
        user_id: field("user_id"),
        user_name: field("user_name"),
        channel_id: field("channel_id"),
        channel_name: field("channel_name"),
        team_id: field("team_id"),
        team_domain: field("team_domain"),
        response_url: field("response_url"),
        trigger_id: field("trigger_id"),
    })
}
