use serde_json::Value;

use zara_gateway::api::helpers::{
    accepted, err_response, ok_ephemeral, ok_in_channel, ok_json, ok_message, plain_text,
};

/// Tests for the response builders shared by the API handlers.
/// These verify the API Gateway proxy shapes and the Slack reply payloads.

fn body_of(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

#[test]
fn test_ephemeral_payload() {
    let response = ok_ephemeral("Usage: /zara <your prompt>");

    assert_eq!(response["statusCode"], 200);
    let body = body_of(&response);
    assert_eq!(body["response_type"], "ephemeral");
    assert_eq!(body["text"], "Usage: /zara <your prompt>");
}

#[test]
fn test_in_channel_payload() {
    let response = ok_in_channel("Processing your request...\n> hello");

    assert_eq!(response["statusCode"], 200);
    let body = body_of(&response);
    assert_eq!(body["response_type"], "in_channel");
    assert_eq!(body["text"], "Processing your request...\n> hello");
}

#[test]
fn test_plain_text_sets_content_type() {
    let response = plain_text("xyz");

    assert_eq!(response["statusCode"], 200);
    // The challenge echo must be the literal string, not JSON-wrapped
    assert_eq!(response["body"], "xyz");
    assert_eq!(response["headers"]["Content-Type"], "text/plain");
}

#[test]
fn test_accepted_payload() {
    let response = accepted(&serde_json::json!({"status": "queued"}));

    assert_eq!(response["statusCode"], 202);
    assert_eq!(body_of(&response)["status"], "queued");
}

#[test]
fn test_ok_json_payload() {
    let response = ok_json(&serde_json::json!({"message_id": "m1"}));

    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_of(&response)["message_id"], "m1");
}

#[test]
fn test_ok_message_payload() {
    let response = ok_message("Bot message ignored");

    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_of(&response)["message"], "Bot message ignored");
}

#[test]
fn test_err_response_payload() {
    let response = err_response(401, "Invalid request signature");

    assert_eq!(response["statusCode"], 401);
    assert_eq!(body_of(&response)["error"], "Invalid request signature");
}
