use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{
        header::{HOST, LOCATION},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ProblemDetails},
        customer::{CustomerPayload, CustomerRequest, CustomerResponse, GetAllCustomersResponse},
    },
    server::{
        error::{customer::CustomerError, Error},
        model::app::AppState,
        service::customer::CustomerService,
    },
};

pub static CUSTOMER_TAG: &str = "customer";

static DEFAULT_HOST: &str = "localhost";

/// Create a customer
///
/// The GitHub username must belong to an existing GitHub account. It is looked up before
/// any other field is checked, so missing or malformed fields are reported together with
/// an unknown GitHub user.
#[utoipa::path(
    post,
    path = "/customers",
    tag = CUSTOMER_TAG,
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse,
            headers(("Location" = String, description = "URL of the new customer"))),
        (status = 400, description = "One or more fields are invalid", body = ProblemDetails,
            content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(CustomerError::from)?;

    let customer_service = CustomerService::new(&state.db, &state.github);

    let customer = customer_service.create(payload).await?;

    let host = headers
        .get(HOST)
        .and_then(|host| host.to_str().ok())
        .unwrap_or(DEFAULT_HOST);
    let location = format!("http://{}/customers/{}", host, customer.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(customer)))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found", body = ProblemDetails,
            content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.db, &state.github);

    let customer = customer_service.get(parse_id(id)?).await?;

    Ok((StatusCode::OK, Json(customer)))
}

/// Get every customer, oldest first
#[utoipa::path(
    get,
    path = "/customers",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "All stored customers", body = GetAllCustomersResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_customers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.db, &state.github);

    let customers = customer_service.get_all().await?;

    Ok((StatusCode::OK, Json(GetAllCustomersResponse { customers })))
}

/// Delete a customer by ID
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = ProblemDetails,
            content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.db, &state.github);

    customer_service.delete(parse_id(id)?).await?;

    Ok(StatusCode::OK)
}

/// IDs that aren't UUIDs can't name a customer, so they are reported as not found.
fn parse_id(id: String) -> Result<Uuid, CustomerError> {
    Uuid::parse_str(&id).map_err(|_| CustomerError::InvalidId(id))
}
