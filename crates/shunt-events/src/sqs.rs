//! SQS queue batch events.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::FromPayload;
use crate::value::{map_at, seq_at, string_at};

/// A single queued message.
#[derive(Debug, Clone, Serialize)]
pub struct SqsMessage {
    /// Message ID assigned by the queue.
    pub message_id: String,
    /// Message body.
    pub body: String,
    /// Message attributes, preserved as a generic mapping.
    pub attributes: Map<String, Value>,
}

impl SqsMessage {
    pub fn from_value(value: &Value) -> Self {
        Self {
            message_id: string_at(value, "messageId"),
            body: string_at(value, "body"),
            attributes: map_at(value, "messageAttributes"),
        }
    }
}

/// A batch of SQS messages, in delivery order.
#[derive(Debug, Clone, Serialize)]
pub struct SqsEvent {
    #[serde(skip)]
    raw: Value,

    /// Messages in the batch, source order preserved.
    pub records: Vec<SqsMessage>,
}

impl FromPayload for SqsEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            records: seq_at(payload, "Records")
                .iter()
                .map(SqsMessage::from_value)
                .collect(),
        }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}
