
use customers_test_utils::prelude::*;

use crate::server::service::github::{GitHubConfig, GitHubService};

use super::*;

/// Build a GitHub client pointed at the test's fake API.
fn github_service(test: &TestContext) -> GitHubService {
    GitHubService::new(&GitHubConfig::new(test.github_url())).unwrap()
}
