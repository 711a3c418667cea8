//! Structural classification of raw payloads.
//!
//! Serverless payloads carry no out-of-band type tag: the family has to be
//! recognized from the payload's shape alone. Each [`EventKind`] variant
//! pairs a structural predicate ([`matches`](EventKind::matches)) with a
//! parser ([`parse`](EventKind::parse)), the two-operation contract every
//! classifier satisfies.
//!
//! Predicates are necessary-condition checks on key presence and tag
//! equality, not schema validation. They are total and side-effect-free:
//! malformed input is "does not match", never an error.
//!
//! Several batch families share an identical top-level shape (a `Records`
//! sequence) and differ only in the first record's source tag, so on
//! well-formed payloads at most one predicate is true. Nothing relies on
//! that: ties between predicates that a crafted payload satisfies
//! simultaneously are broken by order: [`DEFAULT_ORDER`](EventKind::DEFAULT_ORDER)
//! here, registration order in the router.

use serde_json::Value;
use tracing::trace;

use shunt_events::{
    ApiGatewayEvent, CustomEvent, DynamoDbStreamEvent, Event, EventBridgeEvent, FromPayload,
    KafkaEvent, KinesisStreamEvent, S3Event, SnsEvent, SqsEvent,
};

/// Source tag of queue batch records.
const SQS_SOURCE: &str = "aws:sqs";
/// Source tag of blob-storage batch records.
const S3_SOURCE: &str = "aws:s3";
/// Source tag of change-stream batch records.
const DYNAMODB_SOURCE: &str = "aws:dynamodb";
/// Source tag of data-stream batch records.
const KINESIS_SOURCE: &str = "aws:kinesis";
/// Source tag of pub/sub batch records.
const SNS_SOURCE: &str = "aws:sns";
/// Top-level source tags of Kafka batches.
const KAFKA_SOURCES: [&str; 2] = ["aws:kafka", "aws:self-managed-kafka"];

/// The closed set of classifiable event families.
///
/// One variant per family; the generic fallback is deliberately absent:
/// it matches everything and lives in the router's single fallback slot,
/// never in an ordered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// HTTP request through an API Gateway REST endpoint.
    ApiGateway,
    /// SQS queue batch.
    Sqs,
    /// S3 blob-storage batch.
    S3,
    /// DynamoDB change-stream batch.
    DynamoDb,
    /// Kinesis stream batch.
    Kinesis,
    /// SNS pub/sub batch.
    Sns,
    /// EventBridge scheduled/bus event.
    EventBridge,
    /// MSK / self-managed Kafka batch.
    Kafka,
}

impl EventKind {
    /// All classifier variants, in default probe priority order.
    pub const DEFAULT_ORDER: [EventKind; 8] = [
        EventKind::ApiGateway,
        EventKind::Sqs,
        EventKind::S3,
        EventKind::DynamoDb,
        EventKind::Kinesis,
        EventKind::Sns,
        EventKind::EventBridge,
        EventKind::Kafka,
    ];

    /// Human-readable family name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ApiGateway => "api_gateway",
            EventKind::Sqs => "sqs",
            EventKind::S3 => "s3",
            EventKind::DynamoDb => "dynamodb",
            EventKind::Kinesis => "kinesis",
            EventKind::Sns => "sns",
            EventKind::EventBridge => "eventbridge",
            EventKind::Kafka => "kafka",
        }
    }

    /// Structural predicate: can this family's parser handle the payload?
    ///
    /// Pure and total, returning `false` on any malformed input.
    pub fn matches(&self, payload: &Value) -> bool {
        match self {
            EventKind::ApiGateway => {
                payload.get("httpMethod").is_some()
                    && payload.get("path").is_some()
                    && payload.get("requestContext").is_some()
            }
            EventKind::Sqs => first_record_source(payload, "eventSource") == Some(SQS_SOURCE),
            EventKind::S3 => first_record_source(payload, "eventSource") == Some(S3_SOURCE),
            EventKind::DynamoDb => {
                first_record_source(payload, "eventSource") == Some(DYNAMODB_SOURCE)
            }
            EventKind::Kinesis => {
                first_record_source(payload, "eventSource") == Some(KINESIS_SOURCE)
            }
            // The pub/sub wire format capitalizes the tag key on each record.
            EventKind::Sns => first_record_source(payload, "EventSource") == Some(SNS_SOURCE),
            EventKind::EventBridge => {
                payload.get("source").is_some()
                    && payload.get("detail-type").is_some()
                    && payload.get("detail").is_some()
            }
            EventKind::Kafka => {
                payload
                    .get("eventSource")
                    .and_then(Value::as_str)
                    .is_some_and(|source| KAFKA_SOURCES.contains(&source))
                    && payload.get("records").is_some()
            }
        }
    }

    /// Parses the payload into this family's typed event.
    ///
    /// Meant to be called after [`matches`](Self::matches) returned `true`,
    /// but total either way: without a match it produces a fully-defaulted
    /// event.
    pub fn parse(&self, payload: &Value) -> Event {
        match self {
            EventKind::ApiGateway => Event::ApiGateway(ApiGatewayEvent::from_payload(payload)),
            EventKind::Sqs => Event::Sqs(SqsEvent::from_payload(payload)),
            EventKind::S3 => Event::S3(S3Event::from_payload(payload)),
            EventKind::DynamoDb => Event::DynamoDb(DynamoDbStreamEvent::from_payload(payload)),
            EventKind::Kinesis => Event::Kinesis(KinesisStreamEvent::from_payload(payload)),
            EventKind::Sns => Event::Sns(SnsEvent::from_payload(payload)),
            EventKind::EventBridge => Event::EventBridge(EventBridgeEvent::from_payload(payload)),
            EventKind::Kafka => Event::Kafka(KafkaEvent::from_payload(payload)),
        }
    }
}

/// The first record's source tag under `Records[0].<key>`, if any.
///
/// Shared shape probe for all record-batch families: a non-empty `Records`
/// sequence whose first record carries the tag field.
fn first_record_source<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get("Records")?
        .as_array()?
        .first()?
        .get(key)?
        .as_str()
}

/// Classifies a payload against [`EventKind::DEFAULT_ORDER`].
///
/// Returns the first family whose predicate matches, or `None` when nothing
/// does.
pub fn classify(payload: &Value) -> Option<EventKind> {
    let kind = EventKind::DEFAULT_ORDER
        .into_iter()
        .find(|kind| kind.matches(payload));
    match kind {
        Some(kind) => trace!(family = kind.name(), "payload classified"),
        None => trace!("payload matched no family"),
    }
    kind
}

/// Classifies and parses in one step, falling back to [`Event::Custom`].
///
/// This is the standalone entry point for callers that want a typed event
/// without registering handlers.
pub fn parse_event(payload: &Value) -> Event {
    match classify(payload) {
        Some(kind) => kind.parse(payload),
        None => Event::Custom(CustomEvent::from_payload(payload)),
    }
}
