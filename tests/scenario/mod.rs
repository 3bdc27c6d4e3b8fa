//! End-to-end scenarios against the hosted customers API.
//!
//! Each file defines the cases of one suite and runs them against a host of its own;
//! [`collection`] runs every suite against a single shared host. The host is reset before
//! each case, so every case starts from an empty customer table.

mod collection;
mod delete;
mod get_all;

use axum::http::StatusCode;
use customers::model::{
    api::{ErrorDto, ProblemDetails},
    customer::{CustomerResponse, GetAllCustomersResponse},
};
use customers_test_utils::{prelude::*, suite::Suite};

use crate::util::{assert_equivalent, CustomerApiHost, TestClient, TestResponse};

/// Create `customer` through the API, failing the case unless it is accepted.
async fn create_customer(
    client: &TestClient,
    customer: &CustomerFixture,
) -> Result<CustomerResponse, TestError> {
    let response = client.post_json("/customers", customer).await?;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    response.json()
}

fn assert_not_found(response: &TestResponse) -> Result<(), TestError> {
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.content_type(), Some(ProblemDetails::CONTENT_TYPE));

    let problem: ProblemDetails = response.json()?;
    assert_eq!(problem.title, "Not Found");
    assert_eq!(problem.status, 404);

    Ok(())
}
