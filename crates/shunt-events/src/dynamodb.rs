//! DynamoDB change-stream batch events.

use serde::Serialize;
use serde_json::Value;

use crate::FromPayload;
use crate::value::{seq_at, string_at, value_at};

/// One change-stream record.
///
/// The change image (`Keys`, `NewImage`, `OldImage`, sequence metadata) has
/// no fixed schema and is preserved verbatim under [`change`](Self::change).
#[derive(Debug, Clone, Serialize)]
pub struct DynamoDbStreamRecord {
    /// Record ID.
    pub event_id: String,
    /// Change kind: `INSERT`, `MODIFY`, or `REMOVE`.
    pub event_name: String,
    /// Stream record format version.
    pub event_version: String,
    /// Event source tag.
    pub event_source: String,
    /// Region the table lives in.
    pub aws_region: String,
    /// The `dynamodb` change image, preserved as a generic mapping.
    pub change: Value,
}

impl DynamoDbStreamRecord {
    pub fn from_value(value: &Value) -> Self {
        Self {
            event_id: string_at(value, "eventID"),
            event_name: string_at(value, "eventName"),
            event_version: string_at(value, "eventVersion"),
            event_source: string_at(value, "eventSource"),
            aws_region: string_at(value, "awsRegion"),
            change: value_at(value, "dynamodb"),
        }
    }
}

/// A batch of change-stream records, in stream order.
#[derive(Debug, Clone, Serialize)]
pub struct DynamoDbStreamEvent {
    #[serde(skip)]
    raw: Value,

    /// Records in the batch, source order preserved.
    pub records: Vec<DynamoDbStreamRecord>,
}

impl FromPayload for DynamoDbStreamEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            records: seq_at(payload, "Records")
                .iter()
                .map(DynamoDbStreamRecord::from_value)
                .collect(),
        }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}
