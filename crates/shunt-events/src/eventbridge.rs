//! EventBridge scheduled/bus events.

use serde::Serialize;
use serde_json::Value;

use crate::FromPayload;
use crate::value::{string_at, strings_at, value_at};

/// A bus event (scheduled rule, service event, custom application event).
///
/// The `detail` body is application-defined and preserved verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct EventBridgeEvent {
    #[serde(skip)]
    raw: Value,

    /// Event format version.
    pub version: String,
    /// Event ID.
    pub id: String,
    /// Detail type, e.g. `Scheduled Event`.
    pub detail_type: String,
    /// Event source, e.g. `aws.events`.
    pub source: String,
    /// AWS account the event was emitted in.
    pub account: String,
    /// Emission time.
    pub time: String,
    /// Region the event was emitted in.
    pub region: String,
    /// ARNs of the resources involved.
    pub resources: Vec<String>,
    /// Event detail, preserved as a generic value.
    pub detail: Value,
}

impl FromPayload for EventBridgeEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            version: string_at(payload, "version"),
            id: string_at(payload, "id"),
            detail_type: string_at(payload, "detail-type"),
            source: string_at(payload, "source"),
            account: string_at(payload, "account"),
            time: string_at(payload, "time"),
            region: string_at(payload, "region"),
            resources: strings_at(payload, "resources"),
            detail: value_at(payload, "detail"),
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
    fn test_parse_scheduled_event() {
        let payload = json!({
            "version": "0",
            "id": "ev-1",
            "detail-type": "Scheduled Event",
            "source": "aws.events",
            "account": "123456789012",
            "time": "2024-03-17T12:00:00Z",
            "region": "us-east-1",
            "resources": ["arn:aws:events:us-east-1:123456789012:rule/nightly"],
            "detail": {"job": "cleanup"},
        });

        let event = EventBridgeEvent::from_payload(&payload);
        assert_eq!(event.detail_type, "Scheduled Event");
        assert_eq!(event.source, "aws.events");
        assert_eq!(event.resources.len(), 1);
        assert_eq!(event.detail["job"], json!("cleanup"));
    }

    #[test]
    fn test_absent_detail_defaults_to_empty() {
        let payload = json!({"source": "app.orders", "detail-type": "OrderPlaced"});
        let event = EventBridgeEvent::from_payload(&payload);
        assert_eq!(event.detail, json!({}));
        assert!(event.resources.is_empty());
    }
}
