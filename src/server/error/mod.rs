//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the single place where failures
//! are turned into HTTP responses. Every handler returns `Result<_, AppError>`, so the
//! `IntoResponse` implementation below is the boundary that maps an error kind to a status
//! code and the uniform `ErrorDto` envelope.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::config::ConfigError, model::validation::ValidationErrors},
};

/// Message returned to clients for any failure that is not their fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Top-level application error type.
///
/// Client-caused failures (`BadRequest`, `Validation`, `NotFound`) carry a message that is
/// returned verbatim. Every other variant is an unexpected failure and is reported to the
/// client with a generic message while the detail goes to the log.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, typically from binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body failed field validation.
    ///
    /// Results in 400 Bad Request with every field failure listed.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a `NotFound` error naming the resource kind and its key.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} with ID {} was not found.", resource, id))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other variants, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Validation(errors) => {
                tracing::warn!("Validation failed: {}", errors);
                let body = ErrorDto {
                    success: false,
                    message: errors.to_string(),
                    errors: Some(errors.into_inner()),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details. Used as the fallback for every error without a specific mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Unhandled error occurred: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(INTERNAL_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
