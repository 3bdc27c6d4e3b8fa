use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ProblemDetails;

/// Validation messages keyed by the name of the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, empty if the field passed validation.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();

        write!(f, "{}", messages.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Customer ID {0} not found")]
    NotFound(Uuid),
    #[error("Customer ID {0:?} is not a valid identifier")]
    InvalidId(String),
    #[error("One or more validation errors occurred: {0}")]
    Validation(ValidationErrors),
    #[error("Request body could not be read: {0}")]
    MalformedBody(#[from] JsonRejection),
}

/// Key for problems with the request body as a whole.
pub static BODY_FIELD: &str = "$";

fn problem(status: StatusCode, problem: ProblemDetails) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, ProblemDetails::CONTENT_TYPE)],
        Json(problem),
    )
        .into_response()
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) | Self::InvalidId(_) => {
                tracing::debug!("{}", self);

                problem(StatusCode::NOT_FOUND, ProblemDetails::not_found())
            }
            Self::Validation(errors) => {
                tracing::debug!(%errors, "Rejected customer request");

                problem(
                    StatusCode::BAD_REQUEST,
                    ProblemDetails::validation(errors.into_inner()),
                )
            }
            // Wrong media type keeps axum's own 415
            Self::MalformedBody(
                rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
            ) => {
                let mut errors = ValidationErrors::new();
                errors.add(BODY_FIELD, rejection.body_text());

                Self::Validation(errors).into_response()
            }
            Self::MalformedBody(rejection) => rejection.into_response(),
        }
    }
}
