//! # Shunt Events
//!
//! Typed event models for the Shunt router.
//!
//! Each supported event family gets one model: a plain data struct built
//! from the raw JSON payload via fixed field paths. Construction is total:
//! a missing or mistyped field becomes its empty default, so a malformed
//! payload yields a defaulted event rather than an error. Every model
//! retains the raw payload it was built from as an escape hatch.
//!
//! ## Families
//!
//! ```text
//! ApiGatewayEvent       HTTP request through an API Gateway REST endpoint
//! SqsEvent              queue message batch
//! S3Event               blob-storage notification batch
//! DynamoDbStreamEvent   table change-stream batch
//! KinesisStreamEvent    data stream batch
//! SnsEvent              pub/sub notification batch
//! EventBridgeEvent      scheduled/bus event
//! KafkaEvent            MSK / self-managed Kafka batch
//! CustomEvent           anything else, untyped
//! ```
//!
//! Batch families hold their records in source order; order is semantically
//! meaningful (processing order).

use serde_json::Value;

pub mod api_gateway;
pub mod custom;
pub mod dynamodb;
pub mod eventbridge;
pub mod kafka;
pub mod kinesis;
pub mod s3;
pub mod sns;
pub mod sqs;

mod value;

pub use api_gateway::{ApiGatewayEvent, RequestContext, RequestIdentity};
pub use custom::CustomEvent;
pub use dynamodb::{DynamoDbStreamEvent, DynamoDbStreamRecord};
pub use eventbridge::EventBridgeEvent;
pub use kafka::{KafkaEvent, KafkaRecord};
pub use kinesis::{KinesisRecord, KinesisStreamEvent};
pub use s3::{S3Bucket, S3Event, S3Object, S3Record};
pub use sns::{SnsEvent, SnsMessage};
pub use sqs::{SqsEvent, SqsMessage};

// ============================================================================
// FromPayload
// ============================================================================

/// Total construction of a typed event from a raw payload.
///
/// Implementations never fail: absent or mistyped fields default instead of
/// erroring. The original payload is retained and accessible via
/// [`raw`](Self::raw).
pub trait FromPayload {
    /// Builds the typed event from the raw payload.
    fn from_payload(payload: &Value) -> Self;

    /// The raw source payload this event was built from.
    fn raw(&self) -> &Value;
}

// ============================================================================
// Event union
// ============================================================================

/// A parsed event, tagged by family.
///
/// This is what classification produces when the family is not known
/// statically. Handlers registered for a specific family receive the
/// concrete model instead.
#[derive(Debug, Clone)]
pub enum Event {
    /// HTTP request through an API Gateway REST endpoint.
    ApiGateway(ApiGatewayEvent),
    /// Queue message batch.
    Sqs(SqsEvent),
    /// Blob-storage notification batch.
    S3(S3Event),
    /// Table change-stream batch.
    DynamoDb(DynamoDbStreamEvent),
    /// Data stream batch.
    Kinesis(KinesisStreamEvent),
    /// Pub/sub notification batch.
    Sns(SnsEvent),
    /// Scheduled/bus event.
    EventBridge(EventBridgeEvent),
    /// MSK / self-managed Kafka batch.
    Kafka(KafkaEvent),
    /// Unrecognized payload, untyped.
    Custom(CustomEvent),
}

impl Event {
    /// Human-readable family name.
    pub fn family(&self) -> &'static str {
        match self {
            Event::ApiGateway(_) => "api_gateway",
            Event::Sqs(_) => "sqs",
            Event::S3(_) => "s3",
            Event::DynamoDb(_) => "dynamodb",
            Event::Kinesis(_) => "kinesis",
            Event::Sns(_) => "sns",
            Event::EventBridge(_) => "eventbridge",
            Event::Kafka(_) => "kafka",
            Event::Custom(_) => "custom",
        }
    }

    /// The raw source payload, whichever family this is.
    pub fn raw(&self) -> &Value {
        match self {
            Event::ApiGateway(event) => event.raw(),
            Event::Sqs(event) => event.raw(),
            Event::S3(event) => event.raw(),
            Event::DynamoDb(event) => event.raw(),
            Event::Kinesis(event) => event.raw(),
            Event::Sns(event) => event.raw(),
            Event::EventBridge(event) => event.raw(),
            Event::Kafka(event) => event.raw(),
            Event::Custom(event) => event.raw(),
        }
    }
}
