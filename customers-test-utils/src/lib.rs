//! Test harness for the customers API.
//!
//! Two layers are provided:
//!
//! - [`TestBuilder`] / [`TestContext`] - per-test setup with an in-memory SQLite database,
//!   a fake GitHub API server and seeded customer rows, for unit tests of repositories,
//!   services and handlers.
//! - [`suite`] - class and collection scoped fixtures: a [`suite::Fixture`] is initialized
//!   once, every case of one or more [`suite::Suite`]s runs against it, and the fixture is
//!   disposed after the last case.
//!
//! The building blocks both layers share are the [`DatabaseProvisioner`] and the
//! [`GitHubApiServer`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod database;
pub mod error;
pub mod fixtures;
pub mod github;
pub mod suite;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use database::{DatabaseBackend, DatabaseProvisioner};
pub use error::TestError;
pub use github::GitHubApiServer;

pub mod prelude {
    pub use crate::{
        constant::{THROTTLED_GITHUB_USER, VALID_GITHUB_USER},
        fixtures::customer::{CustomerFactory, CustomerFixture},
        suite, TestBuilder, TestContext, TestError,
    };
}
