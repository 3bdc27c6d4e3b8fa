use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// RFC 9457 problem body returned for client errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type
    #[serde(rename = "type")]
    pub kind: String,
    /// Short, human-readable summary of the problem type
    pub title: String,
    /// HTTP status code of the response
    pub status: u16,
    /// Validation messages keyed by the offending field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    /// Media type problem bodies are served with.
    pub const CONTENT_TYPE: &'static str = "application/problem+json";

    pub fn not_found() -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.5.5".to_string(),
            title: "Not Found".to_string(),
            status: 404,
            errors: None,
        }
    }

    pub fn validation(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.5.1".to_string(),
            title: "One or more validation errors occurred.".to_string(),
            status: 400,
            errors: Some(errors),
        }
    }
}
