//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns an in-memory SQLite database and a fake GitHub API server, both
//! private to the test that built it.

use sea_orm::DatabaseConnection;

use crate::github::GitHubApiServer;

/// Per-test environment.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_customer_table()
///     .with_github_user(VALID_GITHUB_USER)
///     .build()
///     .await?;
///
/// let github = GitHubService::new(&GitHubConfig::new(test.github_url()))?;
/// let customer = test.customer().insert_mock_customer().await?;
/// ```
pub struct TestContext {
    /// Database connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Rows inserted by the builder, in insertion order
    pub customers: Vec<entity::customer::Model>,

    pub(crate) github: GitHubApiServer,
}

impl TestContext {
    /// Base URL of the fake GitHub API.
    pub fn github_url(&self) -> String {
        self.github.url()
    }
}
