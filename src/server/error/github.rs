use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub API rate limit exceeded while looking up user {username:?}")]
    RateLimited { username: String },
    #[error("GitHub API responded with unexpected status {status} while looking up user {username:?}")]
    UnexpectedStatus {
        status: StatusCode,
        username: String,
    },
    #[error("Invalid GitHub client configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Provider failures are not the client's fault, throttling included.
impl IntoResponse for GitHubError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
