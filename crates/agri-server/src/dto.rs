//! Data transfer objects for HTTP message serialization.

use serde::Serialize;
use utoipa::ToSchema;

/// Response from the root endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub docs: String,
    pub redoc: String,
}

/// Response from the health endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// A single problem found while validating a request body.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationIssue {
    /// Machine-readable code, e.g. `missing` or `float_type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the offending value, starting with `body`.
    pub loc: Vec<String>,
    pub msg: String,
    /// The rejected value, when there was one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub input: Option<serde_json::Value>,
}

impl ValidationIssue {
    pub fn new(kind: &str, loc: &[&str], msg: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            input: None,
        }
    }

    pub fn with_input(mut self, input: serde_json::Value) -> Self {
        self.input = Some(input);
        self
    }
}

/// Body returned with a 422 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationIssue>,
}

/// Body returned with 404, 405 and 500 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
