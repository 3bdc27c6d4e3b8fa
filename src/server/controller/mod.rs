//! HTTP controller endpoints for the customers API.
//!
//! Controllers extract request data, call into the service layer and turn the result into
//! an HTTP response. Every handler is annotated with utoipa so it shows up in the generated
//! OpenAPI document.

pub mod customer;
