//! Unified error types for the router.

use thiserror::Error;

/// Errors produced by registration and dispatch.
///
/// Classifiers and event construction are total and never error; the only
/// failure points in the pipeline are the two variants here. A failure
/// inside a user callback is not an error of the router; it lives in the
/// callback's own result type and passes through dispatch unchanged.
#[derive(Debug, Clone, Error)]
pub enum RouterError {
    /// A second fallback registration was attempted.
    ///
    /// Raised at registration time; the first fallback stays in effect.
    #[error("only one fallback handler can be registered")]
    FallbackAlreadyRegistered,

    /// No classifier matched the payload and no fallback is registered.
    #[error("no handler matched the event payload")]
    NoMatchingHandler,
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
