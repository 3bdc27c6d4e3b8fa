//! In-process stand-in for the GitHub REST API.
//!
//! Only the user lookup endpoint (`GET /users/{username}`) is served. Seeded usernames
//! get canned responses; every other username gets GitHub's `404 Not Found` body so the
//! negative path can be exercised without seeding anything.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

use crate::constant::GITHUB_ACCEPT;

static USER_PATH_PATTERN: &str = r"^/users/[^/]+$";
static RATE_LIMIT: u32 = 60;

/// Fake GitHub API bound to an ephemeral local port.
///
/// Mock endpoints live as long as the server; [`GitHubApiServer::dispose`] releases the
/// listener along with every registered mock.
pub struct GitHubApiServer {
    server: ServerGuard,
    seeded: Arc<Mutex<HashSet<String>>>,
    mocks: Vec<Mock>,
}

impl GitHubApiServer {
    /// Bind the fake API and register the not-found fallback for unseeded usernames.
    pub async fn start() -> Self {
        let mut server = Server::new_async().await;
        let seeded: Arc<Mutex<HashSet<String>>> = Arc::default();

        let unseeded = seeded.clone();
        let not_found = server
            .mock("GET", Matcher::Regex(USER_PATH_PATTERN.to_string()))
            .match_request(move |request| {
                let username = request.path().trim_start_matches("/users/");
                !unseeded.lock().unwrap().contains(username)
            })
            .with_status(404)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(
                json!({
                    "message": "Not Found",
                    "documentation_url": "https://docs.github.com/rest/users/users#get-a-user",
                    "status": "404"
                })
                .to_string(),
            )
            .create_async()
            .await;

        Self {
            server,
            seeded,
            mocks: vec![not_found],
        }
    }

    /// Base URL of the fake API, e.g. `http://127.0.0.1:34567`.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Resolve `username` as an existing GitHub user.
    ///
    /// Requests must carry the GitHub `Accept` media type and a user agent, as the real API
    /// requires; requests without them are not answered by this mock.
    pub async fn setup_user(&mut self, username: &str) {
        let id = self.seed(username);

        let mock = self
            .seeded_user_mock(username)
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(user_lookup_body(username, id).to_string())
            .create_async()
            .await;

        self.mocks.push(mock);
    }

    /// Answer lookups of `username` as if the rate limit of the calling host is exhausted.
    pub async fn setup_throttled_user(&mut self, username: &str) {
        self.seed(username);

        let reset = Utc::now().timestamp() + 3600;
        let mock = self
            .seeded_user_mock(username)
            .with_status(403)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_header("x-ratelimit-limit", &RATE_LIMIT.to_string())
            .with_header("x-ratelimit-remaining", "0")
            .with_header("x-ratelimit-used", &RATE_LIMIT.to_string())
            .with_header("x-ratelimit-reset", &reset.to_string())
            .with_header("x-ratelimit-resource", "core")
            .with_body(
                json!({
                    "message": "API rate limit exceeded for 127.0.0.1. (But here's the good news: Authenticated requests get a higher rate limit. Check out the documentation for more details.)",
                    "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
                })
                .to_string(),
            )
            .create_async()
            .await;

        self.mocks.push(mock);
    }

    /// Release the listener and every registered mock.
    pub fn dispose(self) {
        tracing::debug!(url = %self.server.url(), "Disposing fake GitHub API");
    }

    /// Record `username` as seeded and return the numeric GitHub ID assigned to it.
    fn seed(&self, username: &str) -> usize {
        let mut seeded = self.seeded.lock().unwrap();
        seeded.insert(username.to_string());
        seeded.len()
    }

    fn seeded_user_mock(&mut self, username: &str) -> Mock {
        self.server
            .mock("GET", format!("/users/{}", username).as_str())
            .match_header("accept", GITHUB_ACCEPT)
            .match_header("user-agent", Matcher::Regex(".+".to_string()))
    }
}

/// Body shaped like GitHub's `GET /users/{username}` response.
fn user_lookup_body(username: &str, id: usize) -> serde_json::Value {
    let api = "https://api.github.com/users";

    json!({
        "login": username,
        "id": id,
        "node_id": format!("MDQ6VXNlcj{}", id),
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{}?v=4", id),
        "gravatar_id": "",
        "url": format!("{}/{}", api, username),
        "html_url": format!("https://github.com/{}", username),
        "followers_url": format!("{}/{}/followers", api, username),
        "repos_url": format!("{}/{}/repos", api, username),
        "type": "User",
        "site_admin": false,
        "name": null,
        "company": null,
        "blog": "",
        "location": null,
        "email": null,
        "hireable": null,
        "bio": null,
        "twitter_username": null,
        "public_repos": 7,
        "public_gists": 0,
        "followers": 12,
        "following": 3,
        "created_at": "2015-03-14T09:26:53Z",
        "updated_at": "2024-10-01T18:02:11Z"
    })
}
