use std::env;

/// Runtime configuration, read from the environment at invocation time.
///
/// Nothing here is required up front: a missing queue URL surfaces as a
/// configuration error when a publish is attempted, and the signing secret
/// policy is enforced by the Slack handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub queue_url: Option<String>,
    pub slack_signing_secret: Option<String>,
    /// Explicit opt-out from signature enforcement for environments without
    /// a configured secret (local, staging). Off by default: an unsigned
    /// webhook is rejected unless this is set.
    pub allow_unsigned_webhooks: bool,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            queue_url: env::var("SQS_QUEUE_URL").ok(),
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET").ok(),
            allow_unsigned_webhooks: env::var("ALLOW_UNSIGNED_WEBHOOKS")
                .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        }
    }
}
