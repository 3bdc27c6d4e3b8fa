//! The customers API hosted in-process for scenario suites.
//!
//! [`CustomerApiHost`] owns everything a suite needs: a fake GitHub API seeded with
//! [`VALID_GITHUB_USER`] and [`THROTTLED_GITHUB_USER`], a disposable database, and the
//! application built against both. Background jobs and request tracing are off.
//!
//! The database is in-memory SQLite unless the `postgres-test` feature is enabled, in
//! which case each host runs its own PostgreSQL container.

use async_trait::async_trait;
use customers::server::{
    app::{App, AppOptions},
    startup,
};
use customers_test_utils::{
    fixtures::customer::CustomerFixtures,
    prelude::*,
    suite::Fixture,
    DatabaseBackend, DatabaseProvisioner, GitHubApiServer,
};
use sea_orm::DatabaseConnection;

use crate::util::{client::TestClient, test_utils::github_config};

pub struct CustomerApiHost {
    app: App,
    db: DatabaseConnection,
    database: DatabaseProvisioner,
    github: GitHubApiServer,
}

fn database_backend() -> DatabaseBackend {
    if cfg!(feature = "postgres-test") {
        DatabaseBackend::Postgres
    } else {
        DatabaseBackend::Sqlite
    }
}

async fn build_app(
    database: &DatabaseProvisioner,
    github: &GitHubApiServer,
) -> Result<(App, DatabaseConnection), TestError> {
    let db = startup::connect_to_database(database.connection_string())
        .await
        .map_err(|e| TestError::Setup(format!("connecting to test database: {}", e)))?;

    let app = App::build(AppOptions {
        db: db.clone(),
        github: github_config(github.url()),
        background_tasks: false,
        request_tracing: false,
    })
    .await
    .map_err(|e| TestError::Setup(format!("building application: {}", e)))?;

    Ok((app, db))
}

#[async_trait]
impl Fixture for CustomerApiHost {
    type Client = TestClient;

    async fn initialize() -> Result<Self, TestError> {
        let mut github = GitHubApiServer::start().await;
        github.setup_user(VALID_GITHUB_USER).await;
        github.setup_throttled_user(THROTTLED_GITHUB_USER).await;

        let database = match DatabaseProvisioner::start(database_backend()).await {
            Ok(database) => database,
            Err(e) => {
                github.dispose();
                return Err(e);
            }
        };

        let (app, db) = match build_app(&database, &github).await {
            Ok(built) => built,
            Err(e) => {
                if let Err(stop_err) = database.stop().await {
                    tracing::warn!("Failed to stop test database after setup error: {}", stop_err);
                }
                github.dispose();
                return Err(e);
            }
        };

        Ok(Self {
            app,
            db,
            database,
            github,
        })
    }

    fn create_client(&self) -> TestClient {
        TestClient::new(self.app.router())
    }

    async fn reset(&self) -> Result<(), TestError> {
        CustomerFixtures::new(&self.db).delete_all().await?;

        Ok(())
    }

    async fn dispose(self) -> Result<(), TestError> {
        let app_result = self
            .app
            .shutdown()
            .await
            .map_err(|e| TestError::Teardown(format!("shutting down application: {}", e)));

        let database_result = self.database.stop().await;

        self.github.dispose();

        app_result.and(database_result)
    }
}
