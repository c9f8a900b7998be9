use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

use super::helpers::ok_json;

/// Liveness probe. Static healthy status with the current timestamp; no
/// dependency checks.
#[must_use]
pub fn handle_health() -> Value {
    ok_json(&json!({
        "status": "healthy",
        "service": "zara-gateway",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
