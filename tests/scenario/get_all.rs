use super::*;

pub fn cases() -> Suite<TestClient> {
    suite!(
        "get_all_customers",
        [
            returns_created_customer,
            returns_empty_list_when_no_customers_exist,
        ]
    )
}

#[tokio::test]
async fn get_all_customers() -> Result<(), TestError> {
    suite::run_class::<CustomerApiHost>(cases()).await
}

/// Expect 200 with exactly the one customer created
async fn returns_created_customer(client: TestClient) -> Result<(), TestError> {
    let customer = CustomerFactory::new().generate();
    let created = create_customer(&client, &customer).await?;

    let response = client.get("/customers").await?;

    assert_eq!(response.status, StatusCode::OK);
    let body: GetAllCustomersResponse = response.json()?;
    assert_eq!(body.customers, vec![created]);

    Ok(())
}

/// Expect 200 with an empty list, repeatedly
async fn returns_empty_list_when_no_customers_exist(client: TestClient) -> Result<(), TestError> {
    for _ in 0..2 {
        let response = client.get("/customers").await?;

        assert_eq!(response.status, StatusCode::OK);
        let body: GetAllCustomersResponse = response.json()?;
        assert!(body.customers.is_empty());
    }

    Ok(())
}
