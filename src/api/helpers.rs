//! Common response builders for API handlers.
//!
//! Each builder returns the API Gateway proxy response shape
//! `{"statusCode": ..., "body": ...}` the Lambda runtime serializes back.

use serde_json::{Value, json};

/// Returns a 200 OK response with a JSON body.
#[must_use]
pub fn ok_json(data: &Value) -> Value {
    json!({ "statusCode": 200, "body": data.to_string() })
}

/// Returns a 202 Accepted response with a JSON body.
#[must_use]
pub fn accepted(data: &Value) -> Value {
    json!({ "statusCode": 202, "body": data.to_string() })
}

/// Returns a 200 OK response with an explanatory message body.
///
/// Used for deliberately ignored payloads: anything other than a 200 would
/// make the source platform retry non-idempotently.
#[must_use]
pub fn ok_message(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "message": text }).to_string()
    })
}

/// Returns a 200 OK response with an ephemeral Slack message.
#[must_use]
pub fn ok_ephemeral(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "response_type": "ephemeral", "text": text }).to_string()
    })
}

/// Returns a 200 OK response with an in-channel Slack message.
#[must_use]
pub fn ok_in_channel(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "response_type": "in_channel", "text": text }).to_string()
    })
}

/// Returns a 200 OK plain-text response.
///
/// The URL verification handshake expects the challenge echoed back as
/// `text/plain`, not wrapped in JSON.
#[must_use]
pub fn plain_text(body: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "text/plain" },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
