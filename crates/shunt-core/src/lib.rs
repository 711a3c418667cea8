//! # Shunt Core
//!
//! The classification-and-dispatch engine of the Shunt router.
//!
//! A serverless function receives one opaque JSON payload per invocation,
//! with no out-of-band type tag. This crate recognizes the payload's family
//! from its shape alone, parses it into the family's typed model, and hands
//! it to the one callback registered for that family.
//!
//! ```text
//! ┌─────────┐     ┌──────────────────────┐     ┌──────────┐
//! │ Payload │────▶│ Router               │────▶│ Callback │
//! │ (JSON)  │     │  classify ▸ parse    │     │ (typed)  │
//! └─────────┘     └──────────────────────┘     └──────────┘
//! ```
//!
//! - **Classifiers** ([`EventKind`]): a closed set of (predicate, parser)
//!   pairs, one per family. Predicates are pure structural checks; parsers
//!   are total.
//! - **Registration table** ([`Router`]): ordered entries of
//!   (classifier, callback, optional route metadata), built once, immutable
//!   afterwards. At most one fallback.
//! - **Dispatch** ([`Router::dispatch`]): first structural match in
//!   registration order wins; the callback's result passes through
//!   unexamined.
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde_json::{Value, json};
//! use shunt_core::{Router, RouterResult};
//!
//! fn build() -> RouterResult<Router<(), Value>> {
//!     let mut router = Router::new();
//!     router.api_gateway("/users", "GET", |request, _ctx| {
//!         json!({"statusCode": 200, "body": request.path})
//!     });
//!     router.sqs(|batch, _ctx| json!({"processed": batch.records.len()}));
//!     router.fallback(|event, _ctx| json!({"ignored": event.payload()}))?;
//!     Ok(router)
//! }
//! ```

pub mod classify;
pub mod error;
pub mod router;

pub use classify::{EventKind, classify, parse_event};
pub use error::{RouterError, RouterResult};
pub use router::{Route, Router};
