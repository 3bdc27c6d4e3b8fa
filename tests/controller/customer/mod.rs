//! Tests for customer controller endpoints.

mod delete_customer;
mod get_customer;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::*;
