use super::*;

/// Expect every suite to pass against one shared host, initialized and disposed once
#[tokio::test]
async fn customer_api_collection() -> Result<(), TestError> {
    suite::run_collection::<CustomerApiHost>(vec![
        create::cases(),
        get::cases(),
        get_all::cases(),
        delete::cases(),
    ])
    .await
}
