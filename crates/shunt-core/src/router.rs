//! The registration table and dispatcher.
//!
//! A [`Router`] is built once, in a single-writer phase: each registration
//! appends an entry binding a classifier variant to a user callback. After
//! that it is read-only: [`dispatch`](Router::dispatch) walks the table in
//! registration order and invokes the first entry whose classifier matches
//! the payload.
//!
//! Registration order is load-bearing: it is the sole tie-break between
//! classifiers that could both match a crafted payload. The earliest
//! registered entry always wins, deterministically.
//!
//! ```rust,ignore
//! use shunt_core::Router;
//! use serde_json::{Value, json};
//!
//! let mut router: Router<(), Value> = Router::new();
//! router.api_gateway("/users", "GET", |request, _ctx| {
//!     json!({"statusCode": 200, "body": request.path})
//! });
//! router.sqs(|batch, _ctx| json!({"processed": batch.records.len()}));
//! router.fallback(|event, _ctx| json!({"ignored": event.payload()}))?;
//!
//! let result = router.dispatch(&payload, &())?;
//! ```

use std::fmt;

use serde_json::Value;
use tracing::{Level, debug, span, trace};

use shunt_events::{
    ApiGatewayEvent, CustomEvent, DynamoDbStreamEvent, EventBridgeEvent, FromPayload, KafkaEvent,
    KinesisStreamEvent, S3Event, SnsEvent, SqsEvent,
};

use crate::classify::EventKind;
use crate::error::{RouterError, RouterResult};

/// A type-erased registered callback.
///
/// Parsing is fused into the erased closure: invoking it parses the payload
/// into the entry's typed event and calls the user callback with it.
type BoxedCallback<C, R> = Box<dyn Fn(&Value, &C) -> R + Send + Sync>;

/// Routing metadata declared by a gateway registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Declared path pattern.
    pub path: String,
    /// Declared HTTP method, normalized to uppercase.
    pub method: String,
}

/// One entry of the registration table.
struct Registration<C, R> {
    kind: EventKind,
    route: Option<Route>,
    callback: BoxedCallback<C, R>,
}

/// Routes raw payloads to registered callbacks.
///
/// Generic over the opaque invocation context `C` handed to every callback,
/// and the opaque callback result `R` that dispatch returns unexamined.
///
/// # Thread Safety
///
/// The table is mutated only through `&mut self` registration; dispatch
/// takes `&self`. A built `Router` is `Send + Sync` (callbacks are required
/// to be), so it can be shared across threads without locking.
pub struct Router<C, R> {
    /// Ordered registration table.
    entries: Vec<Registration<C, R>>,
    /// The single catch-all slot, outside the ordered table.
    fallback: Option<BoxedCallback<C, R>>,
}

impl<C, R> Default for Router<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> Router<C, R> {
    /// Creates a new router with an empty table and no fallback.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            fallback: None,
        }
    }

    /// Appends an entry at the end of the table.
    ///
    /// No deduplication and no table-size limit: every call appends, and the
    /// append order is the dispatch tie-break order.
    fn push<E, F>(&mut self, kind: EventKind, route: Option<Route>, callback: F)
    where
        E: FromPayload,
        F: Fn(E, &C) -> R + Send + Sync + 'static,
    {
        trace!(family = kind.name(), "handler registered");
        self.entries.push(Registration {
            kind,
            route,
            callback: Box::new(move |payload, context| {
                callback(E::from_payload(payload), context)
            }),
        });
    }

    /// Registers a callback for API Gateway REST requests.
    ///
    /// `path` and `method` are stored as routing metadata and surfaced via
    /// [`gateway_routes`](Self::gateway_routes), but they do not narrow
    /// matching: selection is purely structural, so any gateway-shaped
    /// payload is dispatched to the first-registered gateway entry
    /// regardless of its declared path and method.
    pub fn api_gateway<F>(&mut self, path: impl Into<String>, method: impl Into<String>, callback: F)
    where
        F: Fn(ApiGatewayEvent, &C) -> R + Send + Sync + 'static,
    {
        let route = Route {
            path: path.into(),
            method: method.into().to_uppercase(),
        };
        self.push(EventKind::ApiGateway, Some(route), callback);
    }

    /// Registers a callback for SQS queue batches.
    pub fn sqs<F>(&mut self, callback: F)
    where
        F: Fn(SqsEvent, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::Sqs, None, callback);
    }

    /// Registers a callback for S3 notification batches.
    pub fn s3<F>(&mut self, callback: F)
    where
        F: Fn(S3Event, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::S3, None, callback);
    }

    /// Registers a callback for DynamoDB change-stream batches.
    pub fn dynamodb<F>(&mut self, callback: F)
    where
        F: Fn(DynamoDbStreamEvent, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::DynamoDb, None, callback);
    }

    /// Registers a callback for Kinesis stream batches.
    pub fn kinesis<F>(&mut self, callback: F)
    where
        F: Fn(KinesisStreamEvent, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::Kinesis, None, callback);
    }

    /// Registers a callback for SNS notification batches.
    pub fn sns<F>(&mut self, callback: F)
    where
        F: Fn(SnsEvent, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::Sns, None, callback);
    }

    /// Registers a callback for EventBridge bus events.
    pub fn eventbridge<F>(&mut self, callback: F)
    where
        F: Fn(EventBridgeEvent, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::EventBridge, None, callback);
    }

    /// Registers a callback for MSK / Kafka batches.
    pub fn kafka<F>(&mut self, callback: F)
    where
        F: Fn(KafkaEvent, &C) -> R + Send + Sync + 'static,
    {
        self.push(EventKind::Kafka, None, callback);
    }

    /// Registers the catch-all callback, invoked when no classifier matches.
    ///
    /// The fallback lives outside the ordered table and is consulted last,
    /// whatever the registration order. At most one may be registered:
    /// a second attempt fails with
    /// [`RouterError::FallbackAlreadyRegistered`] and leaves the first in
    /// effect.
    pub fn fallback<F>(&mut self, callback: F) -> RouterResult<()>
    where
        F: Fn(CustomEvent, &C) -> R + Send + Sync + 'static,
    {
        if self.fallback.is_some() {
            return Err(RouterError::FallbackAlreadyRegistered);
        }
        trace!("fallback handler registered");
        self.fallback = Some(Box::new(move |payload, context| {
            callback(CustomEvent::from_payload(payload), context)
        }));
        Ok(())
    }

    /// Dispatches one payload to exactly one callback.
    ///
    /// Scans the table in registration order; the first entry whose
    /// classifier matches parses the payload and its callback runs with
    /// `(typed_event, context)`. The callback's result is returned
    /// unexamined. When nothing matches, the fallback (if registered)
    /// receives the payload untyped; otherwise dispatch fails with
    /// [`RouterError::NoMatchingHandler`].
    pub fn dispatch(&self, payload: &Value, context: &C) -> RouterResult<R> {
        let span = span!(Level::DEBUG, "dispatch");
        let _enter = span.enter();

        for registration in &self.entries {
            if registration.kind.matches(payload) {
                debug!(family = registration.kind.name(), "handler matched");
                return Ok((registration.callback)(payload, context));
            }
            trace!(
                family = registration.kind.name(),
                "check failed, skipping"
            );
        }

        if let Some(fallback) = &self.fallback {
            debug!("no family matched, invoking fallback handler");
            return Ok(fallback(payload, context));
        }

        debug!("no handler matched and no fallback registered");
        Err(RouterError::NoMatchingHandler)
    }

    /// Returns the number of registered handlers, fallback excluded.
    pub fn handler_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether a fallback handler is registered.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Declared gateway routes, in registration order.
    pub fn gateway_routes(&self) -> impl Iterator<Item = &Route> {
        self.entries
            .iter()
            .filter_map(|registration| registration.route.as_ref())
    }
}

impl<C, R> fmt::Debug for Router<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("handler_count", &self.entries.len())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gateway_payload() -> Value {
        json!({"httpMethod": "GET", "path": "/users", "requestContext": {}})
    }

    fn sqs_payload() -> Value {
        json!({"Records": [{"eventSource": "aws:sqs", "messageId": "m1", "body": "hi"}]})
    }

    #[test]
    fn test_gateway_end_to_end() {
        let mut router: Router<(), Value> = Router::new();
        router.api_gateway("/users", "GET", |request, _ctx| {
            assert_eq!(request.http_method, "GET");
            assert_eq!(request.path, "/users");
            json!({"statusCode": 200, "body": "ok"})
        });

        let result = router.dispatch(&gateway_payload(), &()).unwrap();
        assert_eq!(result, json!({"statusCode": 200, "body": "ok"}));
    }

    #[test]
    fn test_sqs_end_to_end() {
        let mut router: Router<(), String> = Router::new();
        router.sqs(|batch, _ctx| {
            assert_eq!(batch.records.len(), 1);
            assert_eq!(batch.records[0].message_id, "m1");
            assert_eq!(batch.records[0].body, "hi");
            "processed".to_owned()
        });

        assert_eq!(router.dispatch(&sqs_payload(), &()).unwrap(), "processed");
    }

    #[test]
    fn test_fallback_receives_unmatched_payload() {
        let mut router: Router<(), Value> = Router::new();
        router
            .fallback(|event, _ctx| event.payload().clone())
            .unwrap();

        let payload = json!({"custom_field": "custom_value"});
        assert_eq!(router.dispatch(&payload, &()).unwrap(), payload);
    }

    #[test]
    fn test_fallback_catches_recognizable_payload_with_empty_table() {
        // The fallback is consulted after the (empty) table scan, so even a
        // queue-shaped payload lands there when no family is registered.
        let mut router: Router<(), Value> = Router::new();
        router
            .fallback(|event, _ctx| event.payload().clone())
            .unwrap();

        assert_eq!(router.dispatch(&sqs_payload(), &()).unwrap(), sqs_payload());
    }

    #[test]
    fn test_no_match_without_fallback_is_an_error() {
        let router: Router<(), Value> = Router::new();
        let result = router.dispatch(&json!({}), &());
        assert!(matches!(result, Err(RouterError::NoMatchingHandler)));
    }

    #[test]
    fn test_second_fallback_rejected_first_kept() {
        let mut router: Router<(), &'static str> = Router::new();
        router.fallback(|_event, _ctx| "first").unwrap();
        router.sqs(|_batch, _ctx| "sqs");

        let result = router.fallback(|_event, _ctx| "second");
        assert!(matches!(result, Err(RouterError::FallbackAlreadyRegistered)));

        // The first registration stays in effect.
        assert_eq!(router.dispatch(&json!({}), &()).unwrap(), "first");
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        // Crafted to satisfy both the bus and the gateway predicates.
        let ambiguous = json!({
            "httpMethod": "GET", "path": "/", "requestContext": {},
            "source": "app", "detail-type": "T", "detail": {},
        });

        let mut router: Router<(), &'static str> = Router::new();
        router.eventbridge(|_event, _ctx| "bus");
        router.api_gateway("/", "GET", |_request, _ctx| "gateway");

        // Earliest registration wins, deterministically across calls.
        for _ in 0..3 {
            assert_eq!(router.dispatch(&ambiguous, &()).unwrap(), "bus");
        }
    }

    #[test]
    fn test_route_metadata_not_consulted_in_matching() {
        let mut router: Router<(), &'static str> = Router::new();
        router.api_gateway("/a", "GET", |_request, _ctx| "a");
        router.api_gateway("/b", "post", |_request, _ctx| "b");

        // Shaped like a request for the second route; still goes first.
        let payload = json!({"httpMethod": "POST", "path": "/b", "requestContext": {}});
        assert_eq!(router.dispatch(&payload, &()).unwrap(), "a");

        let routes: Vec<_> = router.gateway_routes().cloned().collect();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/a");
        assert_eq!(routes[1].method, "POST");
    }

    #[test]
    fn test_every_family_routes_to_its_handler() {
        let mut router: Router<(), &'static str> = Router::new();
        router.api_gateway("/", "GET", |_e, _c| "api_gateway");
        router.sqs(|_e, _c| "sqs");
        router.s3(|_e, _c| "s3");
        router.dynamodb(|_e, _c| "dynamodb");
        router.kinesis(|_e, _c| "kinesis");
        router.sns(|_e, _c| "sns");
        router.eventbridge(|_e, _c| "eventbridge");
        router.kafka(|_e, _c| "kafka");
        assert_eq!(router.handler_count(), 8);

        let batch = |key: &str, source: &str| json!({"Records": [{key: source}]});
        let cases = [
            (gateway_payload(), "api_gateway"),
            (batch("eventSource", "aws:sqs"), "sqs"),
            (batch("eventSource", "aws:s3"), "s3"),
            (batch("eventSource", "aws:dynamodb"), "dynamodb"),
            (batch("eventSource", "aws:kinesis"), "kinesis"),
            (batch("EventSource", "aws:sns"), "sns"),
            (
                json!({"source": "aws.events", "detail-type": "T", "detail": {}}),
                "eventbridge",
            ),
            (
                json!({"eventSource": "aws:kafka", "records": {}}),
                "kafka",
            ),
        ];
        for (payload, expected) in cases {
            assert_eq!(router.dispatch(&payload, &()).unwrap(), expected);
        }
    }

    #[test]
    fn test_context_passed_through_to_callback() {
        struct Invocation {
            request_id: &'static str,
        }

        let mut router: Router<Invocation, String> = Router::new();
        router.sqs(|batch, ctx| format!("{}:{}", ctx.request_id, batch.records.len()));

        let context = Invocation { request_id: "req-9" };
        assert_eq!(router.dispatch(&sqs_payload(), &context).unwrap(), "req-9:1");
    }

    #[test]
    fn test_callback_result_passes_through_unexamined() {
        // Callbacks own their result type; a callback-level failure is not a
        // router error.
        let mut router: Router<(), Result<u32, String>> = Router::new();
        router.sqs(|_batch, _ctx| Err("boom".to_owned()));

        let result = router.dispatch(&sqs_payload(), &()).unwrap();
        assert_eq!(result, Err("boom".to_owned()));
    }

    #[test]
    fn test_duplicate_family_registrations_first_wins() {
        let mut router: Router<(), &'static str> = Router::new();
        router.sqs(|_e, _c| "first");
        router.sqs(|_e, _c| "second");
        assert_eq!(router.handler_count(), 2);
        assert_eq!(router.dispatch(&sqs_payload(), &()).unwrap(), "first");
    }

    #[test]
    fn test_router_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router<(), Value>>();
    }
}
