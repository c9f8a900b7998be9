use thiserror::Error;

/// Crate-wide error taxonomy for the ingestion pipeline.
///
/// Every variant is caught at the handler boundary and converted into a
/// transport-specific response; none of these escape to the Lambda runtime
/// as an unhandled fault.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request body is required")]
    MissingBody,

    #[error("Invalid JSON in request body: {0}")]
    InvalidJson(String),

    #[error("Invalid request: {0}")]
    SchemaValidation(String),

    #[error("Invalid request signature")]
    SignatureInvalid,

    #[error("Request timestamp outside replay window")]
    ReplayWindowExceeded,

    #[error("SQS queue URL not configured")]
    QueueNotConfigured,

    #[error("Failed to publish message to queue: {0}")]
    QueuePublishFailed(String),

    #[error("Unknown payload type: {0}")]
    UnrecognizedPayload(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::InvalidJson(error.to_string())
    }
}
