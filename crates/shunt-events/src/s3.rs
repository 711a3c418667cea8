//! S3 blob-storage notification events.

use serde::Serialize;
use serde_json::Value;

use crate::FromPayload;
use crate::value::{child_at, seq_at, string_at, u64_at};

/// The bucket a notification refers to.
#[derive(Debug, Clone, Serialize)]
pub struct S3Bucket {
    /// Bucket name.
    pub name: String,
    /// Bucket ARN.
    pub arn: String,
}

impl S3Bucket {
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: string_at(value, "name"),
            arn: string_at(value, "arn"),
        }
    }
}

/// The object a notification refers to.
#[derive(Debug, Clone, Serialize)]
pub struct S3Object {
    /// Object key.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Object ETag.
    pub etag: String,
}

impl S3Object {
    pub fn from_value(value: &Value) -> Self {
        Self {
            key: string_at(value, "key"),
            size: u64_at(value, "size"),
            etag: string_at(value, "eTag"),
        }
    }
}

/// One bucket notification (object created, removed, ...).
#[derive(Debug, Clone, Serialize)]
pub struct S3Record {
    /// Notification name, e.g. `ObjectCreated:Put`.
    pub event_name: String,
    /// Notification time.
    pub event_time: String,
    /// Bucket involved.
    pub bucket: S3Bucket,
    /// Object involved.
    pub object: S3Object,
}

impl S3Record {
    pub fn from_value(value: &Value) -> Self {
        let s3 = child_at(value, "s3");
        Self {
            event_name: string_at(value, "eventName"),
            event_time: string_at(value, "eventTime"),
            bucket: S3Bucket::from_value(child_at(s3, "bucket")),
            object: S3Object::from_value(child_at(s3, "object")),
        }
    }
}

/// A batch of S3 notifications, in delivery order.
#[derive(Debug, Clone, Serialize)]
pub struct S3Event {
    #[serde(skip)]
    raw: Value,

    /// Notifications in the batch, source order preserved.
    pub records: Vec<S3Record>,
}

impl FromPayload for S3Event {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            records: seq_at(payload, "Records")
                .iter()
                .map(S3Record::from_value)
                .collect(),
        }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}
