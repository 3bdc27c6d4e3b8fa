use sea_orm::DatabaseConnection;

use crate::server::{data::customer::CustomerRepository, error::Error};

/// Count stored customers for the periodic report.
pub async fn report_customer_count(db: DatabaseConnection) -> Result<u64, Error> {
    let count = CustomerRepository::new(&db).count().await?;

    Ok(count)
}
