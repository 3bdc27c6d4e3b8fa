//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. The generated document is served as JSON at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

pub static OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router with all API endpoints and the OpenAPI document.
///
/// # Registered Endpoints
/// - `POST /customers` - Create a customer
/// - `GET /customers` - Get every customer
/// - `GET /customers/{id}` - Get a customer
/// - `DELETE /customers/{id}` - Delete a customer
/// - `GET /api/docs/openapi.json` - OpenAPI document for the endpoints above
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, github };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Customers", description = "Customers API"), tags(
        (name = controller::customer::CUSTOMER_TAG, description = "Customer API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::customer::create_customer,
            controller::customer::get_all_customers
        ))
        .routes(routes!(
            controller::customer::get_customer,
            controller::customer::delete_customer
        ))
        .split_for_parts();

    routes.route(OPENAPI_PATH, get(move || async move { Json(api) }))
}
