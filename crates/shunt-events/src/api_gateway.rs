//! API Gateway REST API request events.
//!
//! Covers the Lambda proxy integration format for REST APIs only. HTTP APIs
//! (payload v2) and WebSocket APIs use different shapes and are not modeled.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::FromPayload;
use crate::value::{bool_at, child_at, i64_at, map_at, string_at};

// ============================================================================
// Request Context
// ============================================================================

/// Caller identity attached to the request context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestIdentity {
    /// Cognito identity pool ID.
    pub cognito_identity_pool_id: String,
    /// AWS account ID of the caller.
    pub account_id: String,
    /// Cognito identity ID.
    pub cognito_identity_id: String,
    /// The caller.
    pub caller: String,
    /// API key associated with the request.
    pub api_key: String,
    /// Source IP address.
    pub source_ip: String,
    /// Cognito authentication type.
    pub cognito_authentication_type: String,
    /// Cognito authentication provider.
    pub cognito_authentication_provider: String,
    /// User ARN.
    pub user_arn: String,
    /// User agent string.
    pub user_agent: String,
    /// The user.
    pub user: String,
    /// Access key.
    pub access_key: String,
}

impl RequestIdentity {
    fn from_value(value: &Value) -> Self {
        Self {
            cognito_identity_pool_id: string_at(value, "cognitoIdentityPoolId"),
            account_id: string_at(value, "accountId"),
            cognito_identity_id: string_at(value, "cognitoIdentityId"),
            caller: string_at(value, "caller"),
            api_key: string_at(value, "apiKey"),
            source_ip: string_at(value, "sourceIp"),
            cognito_authentication_type: string_at(value, "cognitoAuthenticationType"),
            cognito_authentication_provider: string_at(value, "cognitoAuthenticationProvider"),
            user_arn: string_at(value, "userArn"),
            user_agent: string_at(value, "userAgent"),
            user: string_at(value, "user"),
            access_key: string_at(value, "accessKey"),
        }
    }
}

/// Deployment and request metadata from API Gateway.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestContext {
    /// AWS account ID that owns the API.
    pub account_id: String,
    /// Resource identifier assigned by API Gateway.
    pub resource_id: String,
    /// Operation name.
    pub operation_name: String,
    /// Deployment stage.
    pub stage: String,
    /// Domain name serving the request.
    pub domain_name: String,
    /// Domain prefix.
    pub domain_prefix: String,
    /// Unique request ID.
    pub request_id: String,
    /// Protocol (e.g. `HTTP/1.1`).
    pub protocol: String,
    /// Caller identity.
    pub identity: RequestIdentity,
    /// Resource path as declared in API Gateway.
    pub resource_path: String,
    /// HTTP method.
    pub http_method: String,
    /// Request time in CLF format.
    pub request_time: String,
    /// Request time as a Unix epoch in milliseconds.
    pub request_time_epoch: i64,
    /// Request path.
    pub path: String,
}

impl RequestContext {
    fn from_value(value: &Value) -> Self {
        Self {
            account_id: string_at(value, "accountId"),
            resource_id: string_at(value, "resourceId"),
            operation_name: string_at(value, "operationName"),
            stage: string_at(value, "stage"),
            domain_name: string_at(value, "domainName"),
            domain_prefix: string_at(value, "domainPrefix"),
            request_id: string_at(value, "requestId"),
            protocol: string_at(value, "protocol"),
            identity: RequestIdentity::from_value(child_at(value, "identity")),
            resource_path: string_at(value, "resourcePath"),
            http_method: string_at(value, "httpMethod"),
            request_time: string_at(value, "requestTime"),
            request_time_epoch: i64_at(value, "requestTimeEpoch"),
            path: string_at(value, "path"),
        }
    }
}

// ============================================================================
// ApiGatewayEvent
// ============================================================================

/// An HTTP request delivered through an API Gateway REST endpoint.
///
/// Contains the method, path, headers, parameters, body, and request context
/// of the original HTTP request. All fields default when absent; header and
/// parameter maps are preserved as generic mappings.
#[derive(Debug, Clone, Serialize)]
pub struct ApiGatewayEvent {
    /// Raw source payload (not serialized).
    #[serde(skip)]
    raw: Value,

    /// Payload format version.
    pub version: String,
    /// Resource path declared in API Gateway.
    pub resource: String,
    /// Request path.
    pub path: String,
    /// HTTP method.
    pub http_method: String,
    /// Request headers.
    pub headers: Map<String, Value>,
    /// Multi-value request headers.
    pub multi_value_headers: Map<String, Value>,
    /// Query string parameters.
    pub query_string_parameters: Map<String, Value>,
    /// Multi-value query string parameters.
    pub multi_value_query_string_parameters: Map<String, Value>,
    /// Path parameters.
    pub path_parameters: Map<String, Value>,
    /// Stage variables declared in API Gateway.
    pub stage_variables: Map<String, Value>,
    /// Request context, including caller identity.
    pub request_context: RequestContext,
    /// Request body.
    pub body: String,
    /// Whether the body is base64-encoded.
    pub is_base64_encoded: bool,
}

impl FromPayload for ApiGatewayEvent {
    fn from_payload(payload: &Value) -> Self {
        Self {
            raw: payload.clone(),
            version: string_at(payload, "version"),
            resource: string_at(payload, "resource"),
            path: string_at(payload, "path"),
            http_method: string_at(payload, "httpMethod"),
            headers: map_at(payload, "headers"),
            multi_value_headers: map_at(payload, "multiValueHeaders"),
            query_string_parameters: map_at(payload, "queryStringParameters"),
            multi_value_query_string_parameters: map_at(payload, "multiValueQueryStringParameters"),
            path_parameters: map_at(payload, "pathParameters"),
            stage_variables: map_at(payload, "stageVariables"),
            request_context: RequestContext::from_value(child_at(payload, "requestContext")),
            body: string_at(payload, "body"),
            is_base64_encoded: bool_at(payload, "isBase64Encoded"),
        }
    }

    fn raw(&self) -> &Value {
        &self.raw
    }
}
