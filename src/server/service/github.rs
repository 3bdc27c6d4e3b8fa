//! GitHub REST API client used to verify customer usernames.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    StatusCode, Url,
};

use crate::server::error::github::GitHubError;

/// Media type requested from the GitHub REST API.
pub static GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

static DEFAULT_USER_AGENT: &str = "customers-api";
static REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the GitHub API lives and how to identify to it.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl GitHubConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct GitHubService {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubService {
    /// Build a client for the API at `config.base_url`.
    ///
    /// # Returns
    /// - `Ok(GitHubService)` - Client ready to send requests
    /// - `Err(GitHubError::InvalidConfig)` - Base URL is not an absolute URL
    /// - `Err(GitHubError::Request)` - HTTP client could not be built
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        Url::parse(&config.base_url).map_err(|e| {
            GitHubError::InvalidConfig(format!("base URL {:?}: {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up `username` with `GET /users/{username}`.
    ///
    /// # Returns
    /// - `Ok(true)` - User exists
    /// - `Ok(false)` - GitHub has no user by that name
    /// - `Err(GitHubError::RateLimited)` - Rate limit for this host is exhausted
    /// - `Err(GitHubError::UnexpectedStatus)` - Any other response status
    /// - `Err(GitHubError::Request)` - Request could not be sent
    pub async fn is_valid_github_user(&self, username: &str) -> Result<bool, GitHubError> {
        let url = format!("{}/users/{}", self.base_url, username);
        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::TOO_MANY_REQUESTS => Err(GitHubError::RateLimited {
                username: username.to_string(),
            }),
            StatusCode::FORBIDDEN if is_rate_limit_exhausted(response.headers()) => {
                Err(GitHubError::RateLimited {
                    username: username.to_string(),
                })
            }
            status => Err(GitHubError::UnexpectedStatus {
                status,
                username: username.to_string(),
            }),
        }
    }
}

/// GitHub signals primary rate limiting with a 403 and no remaining requests.
fn is_rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0")
}
