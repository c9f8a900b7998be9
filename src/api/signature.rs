use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

use crate::errors::GatewayError;

type HmacSha256 = Hmac<Sha256>;

/// Maximum age (either direction) of a signed request timestamp.
pub const REPLAY_WINDOW_SECS: i64 = 300;

/// Verify that a request genuinely originated from Slack.
///
/// The signature is computed over the exact raw body bytes; re-serialized
/// JSON would not match. Comparison of the provided signature against the
/// computed MAC is constant-time.
///
/// # Errors
///
/// Returns [`GatewayError::ReplayWindowExceeded`] when the timestamp is more
/// than [`REPLAY_WINDOW_SECS`] from the current time, and
/// [`GatewayError::SignatureInvalid`] for any other failure: a non-numeric
/// timestamp, a signature without the `v0=` prefix or with non-hex content,
/// or a MAC mismatch.
pub fn verify_slack_signature(
    signing_secret: &str,
    timestamp: &str,
    request_body: &str,
    signature: &str,
) -> Result<(), GatewayError> {
    let Ok(ts) = timestamp.parse::<i64>() else {
        error!("Non-numeric request timestamp");
        return Err(GatewayError::SignatureInvalid);
    };

    let now = epoch_secs();
    if (now - ts).abs() > REPLAY_WINDOW_SECS {
        error!("Timestamp out of range, potential replay attack");
        return Err(GatewayError::ReplayWindowExceeded);
    }

    let Some(hex_sig) = signature.strip_prefix("v0=") else {
        error!("Signature missing v0= prefix");
        return Err(GatewayError::SignatureInvalid);
    };
    let Ok(provided) = hex::decode(hex_sig) else {
        error!("Signature is not valid hex");
        return Err(GatewayError::SignatureInvalid);
    };

    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .map_err(|_| GatewayError::SignatureInvalid)?;
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());

    // Constant-time comparison
    if mac.verify_slice(&provided).is_ok() {
        Ok(())
    } else {
        error!("Signature verification failed");
        Err(GatewayError::SignatureInvalid)
    }
}

/// Compute the expected signature for a timestamp and body.
///
/// Builds the `v0:{timestamp}:{body}` basestring, keys an HMAC-SHA256 with
/// the signing secret, and prefixes the hex digest with `v0=`.
#[must_use]
pub fn compute_signature(signing_secret: &str, timestamp: &str, request_body: &str) -> String {
    let mut mac = match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}

fn epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
