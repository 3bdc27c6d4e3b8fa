//! Declarative per-test setup.
//!
//! Configuration methods only queue work; tables, fake GitHub users and customer rows are
//! created in one go by [`TestBuilder::build`].

use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};

use crate::{
    database::{DatabaseBackend, DatabaseProvisioner},
    error::TestError,
    fixtures::customer::{CustomerFixture, CustomerFixtures},
    github::GitHubApiServer,
    TestContext,
};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    include_customer_table: bool,
    github_users: Vec<String>,
    throttled_github_users: Vec<String>,
    customers: Vec<CustomerFixture>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the customer table.
    pub fn with_customer_table(mut self) -> Self {
        self.include_customer_table = true;
        self
    }

    /// Resolve `username` as an existing user on the fake GitHub API.
    pub fn with_github_user(mut self, username: &str) -> Self {
        self.github_users.push(username.to_string());
        self
    }

    /// Answer lookups of `username` on the fake GitHub API with a rate limit response.
    pub fn with_throttled_github_user(mut self, username: &str) -> Self {
        self.throttled_github_users.push(username.to_string());
        self
    }

    /// Insert a customer row. Implies [`Self::with_customer_table`].
    pub fn with_customer(mut self, customer: CustomerFixture) -> Self {
        self.include_customer_table = true;
        self.customers.push(customer);
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut github = GitHubApiServer::start().await;
        for username in &self.github_users {
            github.setup_user(username).await;
        }
        for username in &self.throttled_github_users {
            github.setup_throttled_user(username).await;
        }

        let database = DatabaseProvisioner::start(DatabaseBackend::Sqlite).await?;
        let db = Database::connect(database.connection_string()).await?;

        if self.include_customer_table {
            let schema = Schema::new(DbBackend::Sqlite);
            let stmt = schema.create_table_from_entity(entity::prelude::Customer);
            db.execute(&stmt).await?;
        }

        let mut customers = Vec::with_capacity(self.customers.len());
        for customer in &self.customers {
            customers.push(CustomerFixtures::new(&db).insert(customer).await?);
        }

        Ok(TestContext {
            db,
            customers,
            github,
        })
    }
}
