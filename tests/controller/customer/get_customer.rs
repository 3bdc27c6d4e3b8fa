use customers::server::controller::customer::get_customer;
use uuid::Uuid;

use super::*;

/// Expect 200 for a stored customer
#[tokio::test]
async fn ok_for_stored_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer(CustomerFactory::new().generate())
        .build()
        .await?;
    let id = test.customers[0].id;

    let result = get_customer(State(test.into_app_state()), Path(id.to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for an unknown ID
#[tokio::test]
async fn not_found_for_unknown_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_customer_table().build().await?;

    let result = get_customer(
        State(test.into_app_state()),
        Path(Uuid::new_v4().to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 without touching the database for an ID that isn't a UUID
#[tokio::test]
async fn not_found_for_malformed_id() -> Result<(), TestError> {
    // No tables, so reaching the database would produce a 500
    let test = TestBuilder::new().build().await?;

    let result = get_customer(State(test.into_app_state()), Path("42".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
