//! Error envelope returned by the relay endpoints

use crate::shared::RelayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// Relay endpoint that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Init,
    CreateComponent,
    ListProjects,
}

impl Endpoint {
    /// Envelope key holding the human-readable message
    pub fn message_key(self) -> &'static str {
        match self {
            Endpoint::CreateComponent => "error_message",
            Endpoint::Init | Endpoint::ListProjects => "message",
        }
    }

    fn action(self) -> &'static str {
        match self {
            Endpoint::Init => "initialize project",
            Endpoint::CreateComponent => "create component",
            Endpoint::ListProjects => "list projects",
        }
    }
}

/// API error: a RelayError bound to the endpoint it happened on
#[derive(Debug)]
pub struct ApiError {
    pub endpoint: Endpoint,
    pub error: RelayError,
}

impl ApiError {
    pub fn new(endpoint: Endpoint, error: RelayError) -> Self {
        Self { endpoint, error }
    }

    pub fn status(&self) -> StatusCode {
        if self.error.is_validation() {
            return StatusCode::BAD_REQUEST;
        }

        match &self.error {
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `{"success": false, <message_key>: ..., "error"?: ...}`
    pub fn envelope(&self) -> Value {
        let message = match &self.error {
            RelayError::Internal { .. } => format!("Failed to {}", self.endpoint.action()),
            other => other.to_string(),
        };

        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(false));
        body.insert(
            self.endpoint.message_key().to_string(),
            Value::String(message),
        );
        if let Some(details) = self.error.details() {
            body.insert("error".to_string(), Value::String(details.to_string()));
        }
        Value::Object(body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.error {
            RelayError::Upstream { details } => {
                tracing::warn!(endpoint = ?self.endpoint, %details, "upstream request failed");
            }
            RelayError::Internal { details } => {
                tracing::error!(endpoint = ?self.endpoint, %details, "unexpected relay failure");
            }
            other => {
                tracing::debug!(endpoint = ?self.endpoint, error = %other, "rejected request");
            }
        }

        (status, Json(self.envelope())).into_response()
    }
}

/// Result type alias for handler operations
pub type ApiResult<T> = Result<T, ApiError>;
