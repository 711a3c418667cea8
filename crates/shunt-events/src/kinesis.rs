//! Kinesis stream batch events.

use serde::Serialize;
use serde_json::Value;

use crate::FromPayload;
use crate::value::{bytes_at, child_at, f64_at, seq_at, string_at};

/// One stream record.
#[derive(Debug, Clone, Serialize)]
pub struct KinesisRecord {
    /// Stream record schema version.
    pub schema_version: String,
    /// Partition key the record was written with.
    pub partition_key: String,
    /// Sequence number within the shard.
    pub sequence_number: String,
    /// Record payload, carried as opaque bytes.
    ///
    /// On the wire this is base64 text; it is not decoded here.
    pub data: Vec<u8>,
    /// Approximate arrival time as a Unix epoch in seconds.
    pub approximate_arrival_timestamp: f64,
}

impl KinesisRecord {
    pub fn from_value(value: &Value) -> Self {
        let kinesis = child_at(value, "kinesis");
        Self {
            schema_version: string_at(kinesis, "kinesisSchemaVersion"),
            partition_key: string_at(kinesis, "partitionKey"),
            sequence_number: string_at(kinesis, "sequenceNumber"),
            data: bytes_at(kinesis, "data"),
            approximate_arrival_timestamp: f64_at(kinesis, "approximateArrivalTimestamp"),
        }
    }
}

/// A batch of stream records, in shard order.
#[derive(Debug, Clone, Serialize)]
pub struct KinesisStreamEvent {
    #[serde(skip)]
    raw: Value,

    /// Records in the batch, source order preserved.
    pub records: Vec<KinesisRecord>,
}

impl FromPayload for KinesisStreamEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            records: seq_at(payload, "Records")
                .iter()
                .map(KinesisRecord::from_value)
                .collect(),
        }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_stream_record() {
        let payload = json!({
            "Records": [{
                "eventSource": "aws:kinesis",
                "kinesis": {
                    "kinesisSchemaVersion": "1.0",
                    "partitionKey": "pk-1",
                    "sequenceNumber": "495451",
                    "data": "SGVsbG8gV29ybGQ=",
                    "approximateArrivalTimestamp": 1234567890.123,
                },
            }]
        });

        let event = KinesisStreamEvent::from_payload(&payload);
        let record = &event.records[0];
        assert_eq!(record.partition_key, "pk-1");
        assert_eq!(record.sequence_number, "495451");
        // Payload bytes are the wire text, still base64-encoded.
        assert_eq!(record.data, b"SGVsbG8gV29ybGQ=");
        assert_eq!(record.approximate_arrival_timestamp, 1234567890.123);
    }

    #[test]
    fn test_missing_kinesis_substructure_defaults() {
        let payload = json!({"Records": [{"eventSource": "aws:kinesis"}]});
        let event = KinesisStreamEvent::from_payload(&payload);
        let record = &event.records[0];
        assert_eq!(record.partition_key, "");
        assert!(record.data.is_empty());
        assert_eq!(record.approximate_arrival_timestamp, 0.0);
    }
}
