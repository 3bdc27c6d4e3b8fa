use testcontainers_modules::testcontainers::TestcontainersError;
use thiserror::Error;

use crate::suite::CaseFailure;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    ContainerError(#[from] TestcontainersError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Fixture could not be assembled, e.g. the service under test failed to build.
    #[error("Fixture setup failed: {0}")]
    Setup(String),
    /// Fixture resources could not be released.
    #[error("Fixture teardown failed: {0}")]
    Teardown(String),
    /// Request could not be sent to, or response read from, the service under test.
    #[error("HTTP client error: {0}")]
    Client(String),
    #[error("{} case(s) failed:\n{}", .0.len(), format_failures(.0))]
    CasesFailed(Vec<CaseFailure>),
}

fn format_failures(failures: &[CaseFailure]) -> String {
    failures
        .iter()
        .map(|failure| format!("  {}", failure))
        .collect::<Vec<_>>()
        .join("\n")
}
