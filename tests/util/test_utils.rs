//! Test utilities for calling handlers directly with a [`TestContext`]

use customers::{
    model::customer::CustomerResponse,
    server::{
        model::app::AppState,
        service::github::{GitHubConfig, GitHubService},
    },
};
use customers_test_utils::{
    constant::TEST_USER_AGENT, fixtures::customer::CustomerFixture, TestContext,
};

/// GitHub client configuration pointed at a fake API.
pub fn github_config(base_url: String) -> GitHubConfig {
    GitHubConfig {
        base_url,
        user_agent: TEST_USER_AGENT.to_string(),
    }
}

/// Extension trait for TestContext to create AppState wired to the fake GitHub API
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let github = GitHubService::new(&github_config(self.github_url()))
            .expect("Failed to build GitHub client for fake API");

        AppState {
            db: self.db.clone(),
            github,
        }
    }
}

/// Assert a returned customer carries exactly the submitted data.
pub fn assert_equivalent(customer: &CustomerResponse, expected: &CustomerFixture) {
    assert_eq!(customer.full_name, expected.full_name);
    assert_eq!(customer.email, expected.email);
    assert_eq!(customer.github_username, expected.github_username);
    assert_eq!(customer.date_of_birth, expected.date_of_birth);
}
