//! Helpers shared by the integration tests.
//!
//! - [`host`] - the customers API running in-process against a disposable database and a
//!   fake GitHub API, usable as a suite fixture
//! - [`client`] - HTTP client sending requests straight into the host's router
//! - [`test_utils`] - glue between `customers_test_utils` contexts and handler tests

pub mod client;
pub mod host;
pub mod test_utils;

pub use client::{TestClient, TestResponse};
pub use host::CustomerApiHost;
pub use test_utils::{assert_equivalent, TestContextExt};
