//! Error types for form decoding and record construction

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// A validation failure attributed to a single form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required part was not present in the request
    #[error("field required")]
    MissingRequiredField { field: String },

    /// The part was expected to carry JSON text but could not be parsed
    #[error("invalid JSON: {reason}")]
    InvalidJson { field: String, reason: String },

    /// The part parsed but does not match the declared shape
    #[error("{reason}")]
    SchemaViolation { field: String, reason: String },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_json(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidJson {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn schema_violation(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::SchemaViolation {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the field this error belongs to
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field }
            | Self::InvalidJson { field, .. }
            | Self::SchemaViolation { field, .. } => field,
        }
    }

    /// Stable machine-readable identifier used in error responses
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "missing_required_field",
            Self::InvalidJson { .. } => "invalid_json",
            Self::SchemaViolation { .. } => "schema_violation",
        }
    }
}

/// Errors raised while turning a multipart request into a record
#[derive(Debug, Error)]
pub enum FormError {
    /// The body is not multipart, is corrupt, or exceeds the body limit
    #[error("Malformed multipart body: {reason}")]
    Malformed { status: StatusCode, reason: String },

    /// One or more fields failed validation
    #[error("Invalid form: {} field error(s)", .0.len())]
    Invalid(Vec<FieldError>),

    /// A record constructor asked for a field its schema does not declare
    #[error("Field '{0}' is not declared by the record schema")]
    Undeclared(String),
}

impl From<FieldError> for FormError {
    fn from(err: FieldError) -> Self {
        Self::Invalid(vec![err])
    }
}

impl FormError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Malformed { status, .. } => *status,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Undeclared(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-attributed entries for the response body
    pub fn details(&self) -> Vec<ErrorDetail> {
        match self {
            Self::Malformed { reason, .. } => vec![ErrorDetail {
                field: None,
                kind: "malformed_body",
                message: reason.clone(),
            }],
            Self::Invalid(errors) => errors
                .iter()
                .map(|e| ErrorDetail {
                    field: Some(e.field().to_string()),
                    kind: e.kind(),
                    message: e.to_string(),
                })
                .collect(),
            Self::Undeclared(field) => vec![ErrorDetail {
                field: Some(field.clone()),
                kind: "internal",
                message: "internal server error".to_string(),
            }],
        }
    }
}

/// One entry of the `detail` array in an error response
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub field: Option<String>,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: Vec<ErrorDetail>,
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Form handling failed: {}", self);
        } else {
            tracing::debug!("Rejected form: {}", self);
        }
        let body = ErrorBody {
            detail: self.details(),
        };
        (status, Json(body)).into_response()
    }
}

/// Errors in a record schema declaration
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate field name in schema: {0}")]
    DuplicateField(String),

    #[error("Default for field '{field}' does not decode: {source}")]
    InvalidDefault {
        field: String,
        #[source]
        source: FieldError,
    },
}
