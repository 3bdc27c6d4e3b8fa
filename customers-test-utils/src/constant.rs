//! Constant values shared by the fixtures.
//!
//! None of these are real credentials or accounts.

/// GitHub username the fake API resolves as an existing user.
pub static VALID_GITHUB_USER: &str = "validuser";

/// GitHub username the fake API answers with a rate limit response.
pub static THROTTLED_GITHUB_USER: &str = "throttleduser";

/// Media type the GitHub REST API expects in the `Accept` header.
///
/// The fake API only answers seeded users for requests carrying this header. It mirrors
/// the service's own `GITHUB_ACCEPT` rather than importing it, since the service crate
/// depends on this one for its tests; a test in the service pins the two together.
pub static GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// User agent the test host's GitHub client identifies itself with.
pub static TEST_USER_AGENT: &str = "customers-tests (+https://github.com/customers-api)";

/// Prefix of the database name generated for each PostgreSQL container.
pub static TEST_DATABASE_PREFIX: &str = "customers";

/// Prefix of the role generated for each PostgreSQL container.
pub static TEST_DATABASE_USER: &str = "customers";
