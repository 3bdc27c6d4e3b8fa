//! Customer fixture utilities.
//!
//! [`CustomerFactory`] generates request data; [`CustomerFixtures`] writes rows straight
//! into the customer table, bypassing the API.

pub mod factory;

pub use factory::{CustomerFactory, CustomerFixture};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
};
use uuid::Uuid;

use crate::TestContext;

impl TestContext {
    pub fn customer(&self) -> CustomerFixtures<'_, sea_orm::DatabaseConnection> {
        CustomerFixtures::new(&self.db)
    }
}

pub struct CustomerFixtures<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerFixtures<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a customer row built from `fixture` with a fresh ID.
    pub async fn insert(
        &self,
        fixture: &CustomerFixture,
    ) -> Result<entity::customer::Model, DbErr> {
        let customer = entity::customer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(fixture.full_name.clone()),
            email: ActiveValue::Set(fixture.email.clone()),
            github_username: ActiveValue::Set(fixture.github_username.clone()),
            date_of_birth: ActiveValue::Set(fixture.date_of_birth),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        customer.insert(self.db).await
    }

    /// Insert a customer row with generated data.
    pub async fn insert_mock_customer(&self) -> Result<entity::customer::Model, DbErr> {
        self.insert(&CustomerFactory::new().generate()).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }

    /// Delete every customer row, returning the number removed.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Customer::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
