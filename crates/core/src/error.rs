use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned for any request that matches no route.
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Message returned when a required field is absent.
pub const FIELDS_REQUIRED: &str = "All fields are required";

/// Unified API error type.
///
/// Handlers are the only place these are produced; repositories return their
/// own error type and the handler picks the client-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("Route not found")]
    RouteNotFound,

    /// A failure outside any handler's own error path, such as an unreadable body.
    #[error("Something went wrong!: {0}")]
    Unhandled(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) | Self::RouteNotFound => 404,
            Self::Internal(_) | Self::Unhandled(_) => 500,
        }
    }

    /// Missing records answer with `{message}`, everything else with `{error}`.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::NotFound(message) => ErrorBody::Message {
                message: message.clone(),
            },
            Self::RouteNotFound => ErrorBody::Error {
                error: ROUTE_NOT_FOUND.to_string(),
            },
            Self::BadRequest(error) | Self::Internal(error) => ErrorBody::Error {
                error: error.clone(),
            },
            Self::Unhandled(details) => {
                ErrorBody::Unhandled(UnhandledEnvelope::new(Some(details.clone())))
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Error { error: String },
    Message { message: String },
    Unhandled(UnhandledEnvelope),
}

/// `{ "error": "…" }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// `{ "message": "…" }`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Envelope for failures nothing else handled: `{ "error": { "message", "details" } }`
#[derive(Debug, Serialize, ToSchema)]
pub struct UnhandledEnvelope {
    pub error: UnhandledBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnhandledBody {
    pub message: String,
    pub details: String,
}

impl UnhandledEnvelope {
    pub fn new(details: Option<String>) -> Self {
        Self {
            error: UnhandledBody {
                message: "Something went wrong!".to_string(),
                details: details
                    .unwrap_or_else(|| "No additional error details available".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn not_found_uses_message_key() {
        let err = ApiError::NotFound("Appointment not found".into());
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            to_value(err.body()).unwrap(),
            json!({ "message": "Appointment not found" })
        );
    }

    #[test]
    fn route_not_found_uses_error_key() {
        let err = ApiError::RouteNotFound;
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            to_value(err.body()).unwrap(),
            json!({ "error": "Route not found" })
        );
    }

    #[test]
    fn internal_and_bad_request_carry_static_message() {
        let err = ApiError::Internal("Failed to fetch appointments".into());
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            to_value(err.body()).unwrap(),
            json!({ "error": "Failed to fetch appointments" })
        );

        let err = ApiError::BadRequest(FIELDS_REQUIRED.into());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn unhandled_error_uses_envelope() {
        let err = ApiError::Unhandled("key must be a string".into());
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            to_value(err.body()).unwrap(),
            json!({
                "error": {
                    "message": "Something went wrong!",
                    "details": "key must be a string"
                }
            })
        );
    }

    #[test]
    fn unhandled_envelope_defaults_details() {
        let body = to_value(UnhandledEnvelope::new(None)).unwrap();
        assert_eq!(body["error"]["message"], "Something went wrong!");
        assert_eq!(
            body["error"]["details"],
            "No additional error details available"
        );

        let body = to_value(UnhandledEnvelope::new(Some("boom".into()))).unwrap();
        assert_eq!(body["error"]["details"], "boom");
    }
}
