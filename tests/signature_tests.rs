use std::time::{SystemTime, UNIX_EPOCH};

use zara_gateway::api::signature::{REPLAY_WINDOW_SECS, compute_signature, verify_slack_signature};
use zara_gateway::errors::GatewayError;

const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
const BODY: &str = "command=%2Fzara&text=hello&user_id=U123";

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[test]
fn test_valid_signature_accepted() {
    let timestamp = now_secs().to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    assert!(verify_slack_signature(SECRET, &timestamp, BODY, &signature).is_ok());
}

#[test]
fn test_tampered_body_rejected() {
    let timestamp = now_secs().to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    // Single-character mutation of the body invalidates the MAC
    let tampered = BODY.replace("hello", "hellp");
    let result = verify_slack_signature(SECRET, &timestamp, &tampered, &signature);
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_tampered_timestamp_rejected() {
    let timestamp = now_secs().to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    let shifted = (now_secs() + 1).to_string();
    let result = verify_slack_signature(SECRET, &shifted, BODY, &signature);
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_tampered_signature_rejected() {
    let timestamp = now_secs().to_string();
    let mut signature = compute_signature(SECRET, &timestamp, BODY);

    // Flip the last hex digit
    let last = signature.pop().unwrap();
    signature.push(if last == '0' { '1' } else { '0' });

    let result = verify_slack_signature(SECRET, &timestamp, BODY, &signature);
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_wrong_secret_rejected() {
    let timestamp = now_secs().to_string();
    let signature = compute_signature("other-secret", &timestamp, BODY);

    let result = verify_slack_signature(SECRET, &timestamp, BODY, &signature);
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_stale_timestamp_rejected_despite_valid_signature() {
    let timestamp = (now_secs() - REPLAY_WINDOW_SECS - 100).to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    let result = verify_slack_signature(SECRET, &timestamp, BODY, &signature);
    assert!(matches!(result, Err(GatewayError::ReplayWindowExceeded)));
}

#[test]
fn test_future_timestamp_rejected() {
    let timestamp = (now_secs() + REPLAY_WINDOW_SECS + 100).to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    let result = verify_slack_signature(SECRET, &timestamp, BODY, &signature);
    assert!(matches!(result, Err(GatewayError::ReplayWindowExceeded)));
}

#[test]
fn test_timestamp_within_window_accepted() {
    let timestamp = (now_secs() - REPLAY_WINDOW_SECS + 30).to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    assert!(verify_slack_signature(SECRET, &timestamp, BODY, &signature).is_ok());
}

#[test]
fn test_non_numeric_timestamp_rejected() {
    let signature = compute_signature(SECRET, "not-a-number", BODY);

    let result = verify_slack_signature(SECRET, "not-a-number", BODY, &signature);
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_signature_without_prefix_rejected() {
    let timestamp = now_secs().to_string();
    let signature = compute_signature(SECRET, &timestamp, BODY);

    // Same digest, missing the v0= prefix
    let bare = signature.trim_start_matches("v0=");
    let result = verify_slack_signature(SECRET, &timestamp, BODY, bare);
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_non_hex_signature_rejected() {
    let timestamp = now_secs().to_string();

    let result = verify_slack_signature(SECRET, &timestamp, BODY, "v0=not-hex-at-all");
    assert!(matches!(result, Err(GatewayError::SignatureInvalid)));
}

#[test]
fn test_compute_signature_shape() {
    let signature = compute_signature(SECRET, "1609753200", BODY);

    assert!(signature.starts_with("v0="));
    // HMAC-SHA256 hex digest is 64 characters
    assert_eq!(signature.len(), "v0=".len() + 64);
}
