//! HTTP error mapping for the student API.
//!
//! # Responsibility
//! - Map every failure kind to an explicit HTTP status.
//! - Render a uniform JSON error body.
//!
//! # Invariants
//! - Validation and domain rule violations are 4xx; storage failures are 5xx.
//! - 5xx bodies never carry storage details; those are logged instead.

use crate::validation::ValidationError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use student_core::StudentServiceError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// Request body failed field validation.
    Validation(ValidationError),
    /// Body or path could not be decoded at all.
    MalformedRequest(String),
    /// Business-layer outcome.
    Service(StudentServiceError),
    RouteNotFound(String),
    /// Runtime failure outside the business layer.
    Internal(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MalformedRequest(message) => write!(f, "Malformed request: {message}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::RouteNotFound(path) => write!(f, "No route for {path}"),
            Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StudentServiceError> for ApiError {
    fn from(value: StudentServiceError) -> Self {
        Self::Service(value)
    }
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    /// Canonical reason phrase for `status`.
    pub error: String,
    pub message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(err) => match err {
                StudentServiceError::EmailTaken(_) => StatusCode::BAD_REQUEST,
                StudentServiceError::StudentNotFound(_) => StatusCode::NOT_FOUND,
                StudentServiceError::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(
                "event=http_error module=api status={} error={self}",
                status.as_u16()
            );
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            debug!(
                "event=http_error module=api status={} error={self}",
                status.as_u16()
            );
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
        })
    }
}
