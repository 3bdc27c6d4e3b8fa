use chrono::NaiveDate;
use uuid::Uuid;

use super::*;

pub fn cases() -> Suite<TestClient> {
    suite!(
        "delete_customer",
        [
            deletes_customer_when_it_exists,
            returns_not_found_when_customer_does_not_exist,
            customer_is_gone_after_delete,
        ]
    )
}

#[tokio::test]
async fn delete_customer() -> Result<(), TestError> {
    suite::run_class::<CustomerApiHost>(cases()).await
}

/// Expect 200 when deleting a stored customer
async fn deletes_customer_when_it_exists(client: TestClient) -> Result<(), TestError> {
    let created = create_customer(&client, &CustomerFactory::new().generate()).await?;

    let response = client.delete(&format!("/customers/{}", created.id)).await?;

    assert_eq!(response.status, StatusCode::OK);

    Ok(())
}

/// Expect 404 problem for an ID that was never created
async fn returns_not_found_when_customer_does_not_exist(
    client: TestClient,
) -> Result<(), TestError> {
    let response = client
        .delete(&format!("/customers/{}", Uuid::new_v4()))
        .await?;

    assert_not_found(&response)
}

/// Expect create, delete and get of one customer to answer 201, 200 and 404
async fn customer_is_gone_after_delete(client: TestClient) -> Result<(), TestError> {
    let jane = CustomerFactory::new()
        .with_full_name("Jane Doe")
        .with_email("jane@x.com")
        .with_github_username(VALID_GITHUB_USER)
        .with_date_of_birth(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
        .generate();

    let response = client.post_json("/customers", &jane).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    let created: CustomerResponse = response.json()?;
    let location = format!("/customers/{}", created.id);

    let response = client.delete(&location).await?;
    assert_eq!(response.status, StatusCode::OK);

    let response = client.get(&location).await?;
    assert_not_found(&response)
}
