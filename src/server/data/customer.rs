use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};
use uuid::Uuid;

/// Column values for a new customer row.
pub struct NewCustomer {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub date_of_birth: NaiveDate,
}

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new customer with a freshly generated ID
    pub async fn create(&self, customer: NewCustomer) -> Result<entity::customer::Model, DbErr> {
        let customer = entity::customer::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            full_name: ActiveValue::Set(customer.full_name),
            email: ActiveValue::Set(customer.email),
            github_username: ActiveValue::Set(customer.github_username),
            date_of_birth: ActiveValue::Set(customer.date_of_birth),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        customer.insert(self.db).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    /// Gets every customer, oldest first
    pub async fn get_all(&self) -> Result<Vec<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::CreatedAt)
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a customer
    ///
    /// Returns OK regardless of customer existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }
}
