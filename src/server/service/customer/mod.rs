//! Customer service layer.
//!
//! Customers are only stored once their GitHub username resolves to a real account. The
//! GitHub lookup happens before any other field is checked, so a provider failure such as
//! rate limiting fails the whole request even if other fields are also invalid.

pub mod validation;

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::customer::{CustomerPayload, CustomerResponse},
    server::{
        data::customer::CustomerRepository,
        error::{
            customer::{CustomerError, ValidationErrors},
            Error,
        },
        service::github::GitHubService,
    },
};

use self::validation::{
    is_valid_github_username, required_message, unknown_github_user_message, validate_fields,
    CUSTOMER_FIELD, GITHUB_USERNAME_FIELD,
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
    github: &'a GitHubService,
}

impl<'a> CustomerService<'a> {
    /// Creates a new instance of [`CustomerService`]
    pub fn new(db: &'a DatabaseConnection, github: &'a GitHubService) -> Self {
        Self { db, github }
    }

    /// Validates and stores a new customer.
    ///
    /// # Arguments
    /// - `payload` - Customer details as submitted by the client, possibly incomplete
    ///
    /// # Returns
    /// - `Ok(CustomerResponse)` - Stored customer with its new ID
    /// - `Err(Error::CustomerError(CustomerError::Validation))` - One or more fields are
    ///   missing or invalid, or the GitHub user does not exist
    /// - `Err(Error::GitHubError)` - GitHub lookup failed, including rate limiting
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, payload: CustomerPayload) -> Result<CustomerResponse, Error> {
        let mut errors = ValidationErrors::new();

        match payload.github_username.as_deref() {
            None => errors.add(
                GITHUB_USERNAME_FIELD,
                required_message(GITHUB_USERNAME_FIELD),
            ),
            Some(username) => {
                // Malformed usernames can't exist on GitHub, no need to ask
                let github_user_exists = is_valid_github_username(username)
                    && self.github.is_valid_github_user(username).await?;

                if !github_user_exists {
                    errors.add(CUSTOMER_FIELD, unknown_github_user_message(username));
                }
            }
        }

        let customer = match validate_fields(payload, Utc::now().date_naive(), &mut errors) {
            Some(customer) if errors.is_empty() => customer,
            _ => return Err(CustomerError::Validation(errors).into()),
        };

        let customer = CustomerRepository::new(self.db).create(customer).await?;

        tracing::info!(id = %customer.id, "Created customer");

        Ok(customer.into())
    }

    /// Returns [`CustomerError::NotFound`] if no customer has the given ID.
    pub async fn get(&self, id: Uuid) -> Result<CustomerResponse, Error> {
        let customer = CustomerRepository::new(self.db)
            .get(id)
            .await?
            .ok_or(CustomerError::NotFound(id))?;

        Ok(customer.into())
    }

    pub async fn get_all(&self) -> Result<Vec<CustomerResponse>, Error> {
        let customers = CustomerRepository::new(self.db).get_all().await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    /// Returns [`CustomerError::NotFound`] if no customer has the given ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), Error> {
        let result = CustomerRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(CustomerError::NotFound(id).into());
        }

        tracing::info!(%id, "Deleted customer");

        Ok(())
    }
}
