//! Zara Gateway - webhook ingestion front door for the Zara agent pipeline.
//!
//! This crate implements the API Lambda that sits between third-party
//! applications and the downstream agent worker:
//! 1. Inbound webhooks (a generic prompt API and Slack slash commands /
//!    Events API callbacks) are authenticated and normalized here
//! 2. Accepted requests become canonical queue messages published to SQS,
//!    where a separate worker picks them up
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution, routed through API Gateway
//! - SQS for task handoff to the downstream worker
//! - HMAC-SHA256 request signature verification for Slack webhooks
//! - Tokio for async runtime
//!
//! Every request flows through the same pipeline: signature verification,
//! classification into a closed [`api::classify::Payload`] variant,
//! normalization into a [`core::models::MessageDraft`], and a single SQS
//! publish that seals the draft with a fresh `message_id` and timestamp.

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration, filtered via `RUST_LOG` (defaulting to `info`). It
/// should be called once at the start of the Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
