//! Generic events with no recognized structure.

use serde::Serialize;
use serde_json::Value;

use crate::FromPayload;

/// An event that matched no known family.
///
/// The payload passes through untyped; this is what the fallback handler
/// receives.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CustomEvent {
    payload: Value,
}

impl CustomEvent {
    /// The untyped payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consumes the event, returning the untyped payload.
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

impl FromPayload for CustomEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            payload: payload.clone(),
        }
    }

    fn raw(&self) -> &Value {
        &self.payload
    }
}
