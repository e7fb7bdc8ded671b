//! # pv-source-http
//!
//! reqwest-backed implementation of `PostSource`: one GET against a fixed
//! endpoint, body decoded as a JSON array of posts.

use async_trait::async_trait;
use pv_core::error::{AppError, Result};
use pv_core::models::Post;
use pv_core::traits::PostSource;

/// The endpoint queried when no override is given.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

pub struct HttpPostSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPostSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Points the source at a different URL. Used by tests and embedding
    /// hosts; the mounted view itself takes no configuration.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpPostSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    /// Issues one GET with no headers, no query parameters and no request
    /// body, then decodes the response body.
    ///
    /// The HTTP status is deliberately not inspected: a non-2xx response
    /// with a decodable array still counts as success, and an error page
    /// surfaces as a decode failure. Both failure kinds collapse into the
    /// single `FetchOrDecode` category.
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| AppError::FetchOrDecode(err.to_string()))?;

        let posts = response
            .json::<Vec<Post>>()
            .await
            .map_err(|err| AppError::FetchOrDecode(err.to_string()))?;

        Ok(posts)
    }
}
