//! # Shunt
//!
//! A typed event router for serverless function payloads.
//!
//! One function endpoint often serves many event sources: HTTP requests
//! through an API gateway, queue batches, storage notifications, stream
//! records, bus events. The payload arrives as schema-less JSON with no
//! type tag. Shunt classifies it structurally, parses it into a typed
//! model, and dispatches it to the one callback registered for its family.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use serde_json::{Value, json};
//! use shunt::prelude::*;
//!
//! fn handler(payload: Value, context: Invocation) -> Value {
//!     let mut router: Router<Invocation, Value> = Router::new();
//!
//!     router.api_gateway("/users", "GET", |request, _ctx| {
//!         json!({"statusCode": 200, "body": request.path})
//!     });
//!     router.sqs(|batch, _ctx| {
//!         for message in &batch.records {
//!             println!("{}: {}", message.message_id, message.body);
//!         }
//!         json!({"processed": batch.records.len()})
//!     });
//!     router.fallback(|event, _ctx| json!({"ignored": event.payload()}))
//!         .expect("first fallback registration");
//!
//!     router.dispatch(&payload, &context).expect("unroutable payload")
//! }
//! ```
//!
//! ## Crates
//!
//! - [`core`](shunt_core): classifiers, registration table, dispatcher.
//! - [`events`](shunt_events): one typed model per event family.

pub use shunt_core as core;
pub use shunt_events as events;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use shunt::prelude::*;
/// ```
pub mod prelude {
    // Router - registration table and dispatch entry point
    pub use shunt_core::{Route, Router, RouterError, RouterResult};

    // Classification - standalone structural probing
    pub use shunt_core::{EventKind, classify, parse_event};

    // Event models - what registered callbacks receive
    pub use shunt_events::{
        ApiGatewayEvent, CustomEvent, DynamoDbStreamEvent, Event, EventBridgeEvent, FromPayload,
        KafkaEvent, KinesisStreamEvent, S3Event, SnsEvent, SqsEvent,
    };
}
