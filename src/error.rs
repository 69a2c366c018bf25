//! Error types for the Galactic server application.
//!
//! This module provides the closed error taxonomy for the request pipeline.
//! Errors flow unchanged from the data layer through the service layer to the
//! transport, where a single `IntoResponse` implementation classifies them
//! into HTTP responses. All errors use `thiserror` for ergonomic definitions
//! with automatic `Display` and `Error` trait implementations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Main error type for the Galactic server application.
///
/// Aggregates transport decode failures, domain-level not-found checks, and
/// database errors into a single unified error type. `#[from]` enables
/// automatic conversion from `sea_orm::DbErr` via the `?` operator.
///
/// # Error Categories
/// - Path parameter decode failures (missing or non-numeric id segment)
/// - Missing resources detected by the domain service
/// - Request body decode failures
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// The id path segment is missing or not a valid integer.
    #[error("invalid path param")]
    InvalidPathParam,
    /// The requested spaceship does not exist (or is soft-deleted).
    #[error("spaceship {0} not found")]
    NotFound(i64),
    /// The request body could not be decoded as JSON.
    #[error("failed to decode request body: {0}")]
    Decode(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// The public API contract maps missing resources to 400 Bad Request rather
/// than 404, and body decode failures to 500 rather than 400; both mappings
/// are part of the published behavior and must not be changed silently.
///
/// # Returns
/// - 400 Bad Request - invalid path parameter, resource not found
/// - 500 Internal Server Error - all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPathParam | Self::NotFound(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body
/// to the client to avoid leaking implementation details. Used as the
/// fallback for errors without a specific HTTP response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
