//! Error types for the Aniverse platform

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Unified error type for Aniverse services
#[derive(Debug, Error)]
pub enum AniverseError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        key: Option<String>,
    },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AniverseError {
    /// Create a validation error without a field reference
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error tied to a specific field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a configuration error, optionally naming the offending key
    pub fn configuration(message: impl Into<String>, key: Option<&str>) -> Self {
        Self::Configuration {
            message: message.into(),
            key: key.map(String::from),
        }
    }

    /// Create a not-found error for a resource id
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl ResponseError for AniverseError {
    fn status_code(&self) -> StatusCode {
        match self {
            AniverseError::Validation { .. } => StatusCode::BAD_REQUEST,
            AniverseError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AniverseError::Forbidden(_) => StatusCode::FORBIDDEN,
            AniverseError::NotFound { .. } => StatusCode::NOT_FOUND,
            AniverseError::Conflict(_) => StatusCode::CONFLICT,
            AniverseError::Configuration { .. }
            | AniverseError::Storage(_)
            | AniverseError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({ "error": self.to_string() });
        if let AniverseError::Validation {
            field: Some(field), ..
        } = self
        {
            body["field"] = serde_json::Value::String(field.clone());
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}
