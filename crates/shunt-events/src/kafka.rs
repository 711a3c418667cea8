//! MSK / self-managed Kafka batch events.

use serde::Serialize;
use serde_json::Value;

use crate::FromPayload;
use crate::value::{bytes_at, i64_at, seq_at, string_at};

/// One consumed Kafka record.
#[derive(Debug, Clone, Serialize)]
pub struct KafkaRecord {
    /// Topic the record was consumed from.
    pub topic: String,
    /// Partition within the topic.
    pub partition: i64,
    /// Offset within the partition.
    pub offset: i64,
    /// Record timestamp in milliseconds.
    pub timestamp: i64,
    /// Timestamp type: `CREATE_TIME` or `LOG_APPEND_TIME`.
    pub timestamp_type: String,
    /// Record key, carried as opaque bytes (base64 wire text, undecoded).
    pub key: Vec<u8>,
    /// Record value, carried as opaque bytes (base64 wire text, undecoded).
    pub value: Vec<u8>,
    /// Record headers, preserved verbatim.
    pub headers: Vec<Value>,
}

impl KafkaRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            topic: string_at(value, "topic"),
            partition: i64_at(value, "partition"),
            offset: i64_at(value, "offset"),
            timestamp: i64_at(value, "timestamp"),
            timestamp_type: string_at(value, "timestampType"),
            key: bytes_at(value, "key"),
            value: bytes_at(value, "value"),
            headers: seq_at(value, "headers").to_vec(),
        }
    }
}

/// A batch of consumed Kafka records.
///
/// The wire format groups records under per-topic-partition keys; groups are
/// flattened in key order. A flat record sequence is accepted as well.
#[derive(Debug, Clone, Serialize)]
pub struct KafkaEvent {
    #[serde(skip)]
    raw: Value,

    /// Event source tag: `aws:kafka` or `aws:self-managed-kafka`.
    pub event_source: String,
    /// ARN of the cluster (MSK only).
    pub event_source_arn: String,
    /// Bootstrap broker list.
    pub bootstrap_servers: String,
    /// Consumed records, per-group order preserved.
    pub records: Vec<KafkaRecord>,
}

fn collect_records(payload: &Value) -> Vec<KafkaRecord> {
    match payload.get("records") {
        Some(Value::Array(records)) => records.iter().map(KafkaRecord::from_value).collect(),
        Some(Value::Object(groups)) => groups
            .values()
            .filter_map(Value::as_array)
            .flatten()
            .map(KafkaRecord::from_value)
            .collect(),
        _ => Vec::new(),
    }
}

impl FromPayload for KafkaEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            event_source: string_at(payload, "eventSource"),
            event_source_arn: string_at(payload, "eventSourceArn"),
            bootstrap_servers: string_at(payload, "bootstrapServers"),
            records: collect_records(payload),
        }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}
