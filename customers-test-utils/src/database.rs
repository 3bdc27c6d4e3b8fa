//! Ephemeral database provisioning.
//!
//! A [`DatabaseProvisioner`] owns one disposable database for the lifetime of a fixture.
//! PostgreSQL runs in a throwaway container with credentials generated per run; SQLite
//! lives in memory and needs no container runtime.

use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};
use uuid::Uuid;

use crate::{
    constant::{TEST_DATABASE_PREFIX, TEST_DATABASE_USER},
    error::TestError,
};

static POSTGRES_PORT: u16 = 5432;
static SQLITE_MEMORY: &str = "sqlite::memory:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    /// In-memory SQLite, private to the connection pool that opens it.
    Sqlite,
    /// PostgreSQL in a container started through the local container runtime.
    Postgres,
}

pub struct DatabaseProvisioner {
    backend: DatabaseBackend,
    connection_string: String,
    container: Option<ContainerAsync<Postgres>>,
}

impl DatabaseProvisioner {
    /// Start a disposable database and wait until it accepts connections.
    ///
    /// # Returns
    /// - `Ok(DatabaseProvisioner)` - Database is ready, see [`Self::connection_string`]
    /// - `Err(TestError::ContainerError)` - Container failed to start within the runtime's
    ///   startup timeout; this is fatal to the fixture and is not retried
    pub async fn start(backend: DatabaseBackend) -> Result<Self, TestError> {
        match backend {
            DatabaseBackend::Sqlite => Ok(Self {
                backend,
                connection_string: SQLITE_MEMORY.to_string(),
                container: None,
            }),
            DatabaseBackend::Postgres => {
                let run_id = Uuid::new_v4().simple().to_string();
                let database = format!("{}_{}", TEST_DATABASE_PREFIX, &run_id[..8]);
                let user = format!("{}_{}", TEST_DATABASE_USER, &run_id[8..16]);
                let password = run_id;

                let container = Postgres::default()
                    .with_db_name(&database)
                    .with_user(&user)
                    .with_password(&password)
                    .start()
                    .await?;

                let host = container.get_host().await?;
                let port = container.get_host_port_ipv4(POSTGRES_PORT).await?;

                tracing::debug!(%host, port, %database, "Started PostgreSQL container");

                Ok(Self {
                    backend,
                    connection_string: format!(
                        "postgres://{}:{}@{}:{}/{}",
                        user, password, host, port, database
                    ),
                    container: Some(container),
                })
            }
        }
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Connection string for the provisioned database, valid until [`Self::stop`].
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Tear the database down and release the container, if any.
    pub async fn stop(self) -> Result<(), TestError> {
        if let Some(container) = self.container {
            container.stop().await?;
            container.rm().await?;

            tracing::debug!("Removed PostgreSQL container");
        }

        Ok(())
    }
}
