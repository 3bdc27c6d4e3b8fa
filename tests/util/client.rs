//! In-process HTTP client for the customers API.
//!
//! Requests are handed directly to the router with `tower::ServiceExt::oneshot`; no socket
//! is opened. Every request carries `Host: localhost`, so `Location` headers come back as
//! `http://localhost/...`.

use axum::{
    body::{Body, Bytes},
    http::{
        header::{CONTENT_TYPE, HOST, LOCATION},
        HeaderMap, Method, Request, StatusCode,
    },
    Router,
};
use customers_test_utils::TestError;
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;

static TEST_HOST: &str = "localhost";

#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn post_json<T: Serialize>(&self, uri: &str, body: &T) -> Result<TestResponse, TestError> {
        let body = serde_json::to_vec(body)?;

        self.send(Method::POST, uri, Some(body)).await
    }

    /// Posts `body` verbatim as `application/json`, for payloads no typed request can express.
    pub async fn post_raw_json(&self, uri: &str, body: &str) -> Result<TestResponse, TestError> {
        self.send(Method::POST, uri, Some(body.as_bytes().to_vec())).await
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse, TestError> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> Result<TestResponse, TestError> {
        self.send(Method::DELETE, uri, None).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        json: Option<Vec<u8>>,
    ) -> Result<TestResponse, TestError> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(HOST, TEST_HOST);

        let request = match json {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json)),
            None => builder.body(Body::empty()),
        }
        .map_err(|e| TestError::Client(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|err| match err {});

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| TestError::Client(e.to_string()))?;

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }
}

/// Fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|value| value.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}
