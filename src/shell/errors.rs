// Maps use case outcomes to HTTP error responses.
//
// Every error body carries the request id as traceId so a client report can be matched with the
// server logs. Details of unexpected failures stay in the logs.

use crate::modules::products::use_cases::errors::ApplicationError;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::convert::Infallible;
use tracing::{error, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

/// The request id set by the request-id layer, or a fresh one when the layer is not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl<S> FromRequestParts<S> for TraceId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::now_v7().to_string());
        Ok(Self(id))
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<u64>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    trace_id: TraceId,
    current_version: Option<u64>,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>, trace_id: TraceId) -> Self {
        Self {
            status,
            message: message.into(),
            trace_id,
            current_version: None,
        }
    }

    pub fn bad_request(trace_id: TraceId, message: impl Into<String>) -> Self {
        let error = Self::new(StatusCode::BAD_REQUEST, message, trace_id);
        warn!(trace_id = %error.trace_id.0, message = %error.message, "bad request");
        error
    }

    pub fn not_found(trace_id: TraceId) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Product not found", trace_id)
    }

    pub fn from_application(trace_id: TraceId, error: ApplicationError) -> Self {
        match error {
            ApplicationError::Invalid(reason) => Self::bad_request(trace_id, reason.to_string()),
            ApplicationError::Conflict { current_version } => {
                warn!(trace_id = %trace_id.0, current_version, "concurrency conflict");
                Self {
                    current_version: Some(current_version),
                    ..Self::new(
                        StatusCode::CONFLICT,
                        format!("Version mismatch. Current version is {current_version}."),
                        trace_id,
                    )
                }
            }
            ApplicationError::Repository(source) => {
                error!(trace_id = %trace_id.0, error = %source, "unhandled failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE, trace_id)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            error: self.message,
            trace_id: self.trace_id.0,
            current_version: self.current_version,
        };
        (self.status, Json(body)).into_response()
    }
}
