use axum::http::StatusCode;
use customers::server::router::{routes, OPENAPI_PATH};

use crate::util::TestClient;

use super::*;

/// Expect the OpenAPI document to describe every customer route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let client = TestClient::new(routes().with_state(test.into_app_state()));

    let response = client.get(OPENAPI_PATH).await?;

    assert_eq!(response.status, StatusCode::OK);
    let document: serde_json::Value = response.json()?;
    assert!(document["paths"]["/customers"]["post"].is_object());
    assert!(document["paths"]["/customers"]["get"].is_object());
    assert!(document["paths"]["/customers/{id}"]["get"].is_object());
    assert!(document["paths"]["/customers/{id}"]["delete"].is_object());

    Ok(())
}
