//! SNS pub/sub batch events.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::FromPayload;
use crate::value::{child_at, map_at, seq_at, string_at};

/// One published notification.
///
/// Fields are drawn from each record's `Sns` substructure. Note the
/// capitalized wire keys (`MessageId`, `TopicArn`, ...), an upstream
/// format quirk of this family.
#[derive(Debug, Clone, Serialize)]
pub struct SnsMessage {
    /// Message ID assigned by the topic.
    pub message_id: String,
    /// ARN of the topic that published the message.
    pub topic_arn: String,
    /// Message body.
    pub message: String,
    /// Message subject.
    pub subject: String,
    /// Publish time.
    pub timestamp: String,
    /// Message attributes, preserved as a generic mapping.
    pub message_attributes: Map<String, Value>,
}

impl SnsMessage {
    pub fn from_value(value: &Value) -> Self {
        let sns = child_at(value, "Sns");
        Self {
            message_id: string_at(sns, "MessageId"),
            topic_arn: string_at(sns, "TopicArn"),
            message: string_at(sns, "Message"),
            subject: string_at(sns, "Subject"),
            timestamp: string_at(sns, "Timestamp"),
            message_attributes: map_at(sns, "MessageAttributes"),
        }
    }
}

/// A batch of published notifications, in delivery order.
#[derive(Debug, Clone, Serialize)]
pub struct SnsEvent {
    #[serde(skip)]
    raw: Value,

    /// Notifications in the batch, source order preserved.
    pub records: Vec<SnsMessage>,
}

impl FromPayload for SnsEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            records: seq_at(payload, "Records")
                .iter()
                .map(SnsMessage::from_value)
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
    fn test_parse_notification() {
        let payload = json!({
            "Records": [{
                "EventSource": "aws:sns",
                "Sns": {
                    "MessageId": "msg-1",
                    "TopicArn": "arn:aws:sns:us-east-1:123456789012:orders",
                    "Message": "order placed",
                    "Subject": "Orders",
                    "Timestamp": "2024-03-17T12:00:00.000Z",
                    "MessageAttributes": {"kind": {"Type": "String", "Value": "create"}},
                },
            }]
        });

        let event = SnsEvent::from_payload(&payload);
        let record = &event.records[0];
        assert_eq!(record.message_id, "msg-1");
        assert_eq!(record.message, "order placed");
        assert_eq!(record.subject, "Orders");
        assert_eq!(record.message_attributes["kind"]["Value"], json!("create"));
    }

    #[test]
    fn test_missing_sns_substructure_defaults() {
        let payload = json!({"Records": [{"EventSource": "aws:sns"}]});
        let event = SnsEvent::from_payload(&payload);
        assert_eq!(event.records[0].message_id, "");
        assert!(event.records[0].message_attributes.is_empty());
    }
}
