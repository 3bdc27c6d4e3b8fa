//! Error types for the customers server.
//!
//! Each domain has its own error enum (configuration, customer operations, the GitHub
//! client). They are aggregated into [`Error`] so handlers can use `?` freely, and every
//! error type implements `IntoResponse` so Axum can turn it into an HTTP response.

pub mod config;
pub mod customer;
pub mod github;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, customer::CustomerError, github::GitHubError},
};

/// Main error type for the customers server.
///
/// Uses `thiserror`'s `#[from]` so the underlying library and domain errors convert with
/// the `?` operator. Only [`CustomerError`] produces client-facing 4xx responses; everything
/// else is reported as an opaque 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Customer not found or failed validation.
    #[error(transparent)]
    CustomerError(#[from] CustomerError),
    /// GitHub lookup failed, including rate limiting.
    #[error(transparent)]
    GitHubError(#[from] GitHubError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup or shutdown).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Listener or socket error while serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CustomerError(err) => err.into_response(),
            Self::GitHubError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details never leak.
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
