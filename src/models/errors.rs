//! Centralized error handling for the contact API.
//!
//! Every client-visible failure maps to one of two HTTP outcomes:
//! 400 for rejected input, 404 for an id that does not resolve. The
//! wire body is always `{"error": <short code>, "message": <detail>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use super::types::RequestKind;

/// Application-wide error type.
///
/// Every variant is terminal for the request; there is no retry or
/// recovery path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One or more required form fields were missing or empty.
    MissingFields { detail: &'static str },
    /// Email failed the syntactic format check.
    InvalidEmail,
    /// Quote submitted without any selected services.
    NoServicesSelected,
    /// Lookup by id found nothing in the targeted store.
    NotFound { kind: RequestKind, id: u64 },
}

impl ContactError {
    pub fn missing_fields(detail: &'static str) -> Self {
        Self::MissingFields { detail }
    }

    pub fn not_found(kind: RequestKind, id: u64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Short code string, exactly as it appears in the `error` field.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "Missing required fields",
            Self::InvalidEmail => "Invalid email",
            Self::NoServicesSelected => "No services selected",
            Self::NotFound { .. } => "Request not found",
        }
    }

    /// Human-readable detail for the `message` field.
    pub fn message(&self) -> String {
        match self {
            Self::MissingFields { detail } => (*detail).to_string(),
            Self::InvalidEmail => "Please provide a valid email address".to_string(),
            Self::NoServicesSelected => "Please select at least one service".to_string(),
            Self::NotFound { kind, id } => {
                format!("{} with ID {} does not exist", kind.as_str(), id)
            }
        }
    }

    /// HTTP status code for API responses.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ContactError {}

/// Wire shape shared by all 400/404 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error_code(),
            message: self.message(),
        };
        (self.http_status(), Json(body)).into_response()
    }
}

/// Application Result type.
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ContactError::missing_fields("Name, email, and message are required");
        assert_eq!(err.error_code(), "Missing required fields");
        assert_eq!(err.message(), "Name, email, and message are required");

        assert_eq!(ContactError::InvalidEmail.error_code(), "Invalid email");
        assert_eq!(
            ContactError::NoServicesSelected.error_code(),
            "No services selected"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ContactError::InvalidEmail.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContactError::not_found(RequestKind::Quote, 7).http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_not_found_message_names_store_and_id() {
        let err = ContactError::not_found(RequestKind::Consultation, 42);
        assert_eq!(
            err.message(),
            "Consultation request with ID 42 does not exist"
        );

        let err = ContactError::not_found(RequestKind::Quote, 9);
        assert_eq!(err.message(), "Quote request with ID 9 does not exist");
    }
}
