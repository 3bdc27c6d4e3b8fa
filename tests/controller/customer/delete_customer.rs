use customers::server::controller::customer::delete_customer;
use uuid::Uuid;

use super::*;

/// Expect 200 and the row removed for a stored customer
#[tokio::test]
async fn ok_for_stored_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer(CustomerFactory::new().generate())
        .build()
        .await?;
    let id = test.customers[0].id;

    let result = delete_customer(State(test.into_app_state()), Path(id.to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test.customer().count().await?, 0);

    Ok(())
}

/// Expect 404 for an unknown ID
#[tokio::test]
async fn not_found_for_unknown_customer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_customer_table().build().await?;

    let result = delete_customer(
        State(test.into_app_state()),
        Path(Uuid::new_v4().to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = delete_customer(
        State(test.into_app_state()),
        Path(Uuid::new_v4().to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
