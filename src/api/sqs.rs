use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::types::MessageAttributeValue;
use chrono::{SecondsFormat, Utc};
use tokio::sync::OnceCell;
use tracing::info;
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::models::{MessageDraft, QueueMessage};
use crate::errors::GatewayError;

/// The external at-least-once delivery channel.
///
/// Abstracted as a capability object so the publisher never reaches into
/// ambient global state; the hosting process injects a cached [`SqsChannel`]
/// and tests inject a mock.
#[async_trait]
pub trait QueueChannel: Send + Sync {
    /// Hand one serialized message to the queue, returning the channel's own
    /// message id.
    async fn send(
        &self,
        queue_url: &str,
        body: &str,
        attributes: &BTreeMap<String, String>,
    ) -> Result<String, GatewayError>;
}

/// Production [`QueueChannel`] backed by the AWS SQS SDK.
pub struct SqsChannel {
    client: SqsClient,
}

impl SqsChannel {
    #[must_use]
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueChannel for SqsChannel {
    async fn send(
        &self,
        queue_url: &str,
        body: &str,
        attributes: &BTreeMap<String, String>,
    ) -> Result<String, GatewayError> {
        let mut request = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body);

        for (name, value) in attributes {
            let attribute = MessageAttributeValue::builder()
                .data_type("String")
                .string_value(value)
                .build()
                .map_err(|e| GatewayError::QueuePublishFailed(e.to_string()))?;
            request = request.message_attributes(name, attribute);
        }

        let output = request
            .send()
            .await
            .map_err(|e| GatewayError::QueuePublishFailed(e.to_string()))?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }
}

static SHARED_CHANNEL: OnceCell<Arc<SqsChannel>> = OnceCell::const_new();

/// Process-wide SQS channel, created on first use and reused across
/// invocations for the lifetime of the Lambda execution environment.
pub async fn shared_channel() -> Arc<SqsChannel> {
    SHARED_CHANNEL
        .get_or_init(|| async {
            let shared_config = aws_config::from_env().load().await;
            Arc::new(SqsChannel::new(SqsClient::new(&shared_config)))
        })
        .await
        .clone()
}

/// Correlation ids returned from a successful publish.
#[derive(Debug)]
pub struct PublishReceipt {
    /// Generated by this gateway, echoed to the caller.
    pub message_id: String,
    /// Assigned by the queue channel.
    pub queue_message_id: String,
}

/// Seals message drafts and hands them to the queue channel.
pub struct QueuePublisher {
    channel: Arc<dyn QueueChannel>,
    queue_url: String,
}

impl QueuePublisher {
    /// # Errors
    ///
    /// Returns [`GatewayError::QueueNotConfigured`] when no queue URL is set.
    pub fn from_config(
        config: &AppConfig,
        channel: Arc<dyn QueueChannel>,
    ) -> Result<Self, GatewayError> {
        let queue_url = config
            .queue_url
            .clone()
            .ok_or(GatewayError::QueueNotConfigured)?;
        Ok(Self { channel, queue_url })
    }

    /// Publish a draft as a canonical queue message.
    ///
    /// Assigns the unique `message_id` and acceptance timestamp exactly once,
    /// here, before handoff; retries of the same logical request get fresh
    /// ids and fresh publishes. `source` and `message_id` ride along as
    /// message attributes for consumer-side filtering, plus any
    /// caller-supplied extras.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::QueuePublishFailed`] when serialization or the
    /// queue round-trip fails.
    pub async fn publish(
        &self,
        draft: MessageDraft,
        extra_attributes: &[(&str, String)],
    ) -> Result<PublishReceipt, GatewayError> {
        let message_id = Uuid::new_v4().to_string();
        let message = QueueMessage {
            message_id: message_id.clone(),
            prompt: draft.prompt,
            source: draft.source,
            callback_url: draft.callback_url,
            metadata: draft.metadata,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let body = serde_json::to_string(&message)
            .map_err(|e| GatewayError::QueuePublishFailed(e.to_string()))?;

        let mut attributes = BTreeMap::new();
        attributes.insert("source".to_string(), message.source.clone());
        attributes.insert("message_id".to_string(), message_id.clone());
        for (name, value) in extra_attributes {
            attributes.insert((*name).to_string(), value.clone());
        }

        let queue_message_id = self.channel.send(&self.queue_url, &body, &attributes).await?;

        info!(
            message_id = %message_id,
            queue_message_id = %queue_message_id,
            source = %message.source,
            "Message queued"
        );

        Ok(PublishReceipt {
            message_id,
            queue_message_id,
        })
    }
}
