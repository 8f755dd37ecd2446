//! Movie catalog client
//!
//! One `GET` against the catalog endpoint, answering a JSON array of movies.
//! No retries: a failed load is final for the session.

use reqwest::header::ACCEPT;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::Movie;

/// Default catalog endpoint
pub const DEFAULT_MOVIES_URL: &str = "https://dummyapi.online/api/movies/";

/// Catalog load error types
#[derive(Error, Debug)]
pub enum MoviesError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl MoviesError {
    /// True when the server was reached but answered badly
    pub fn is_status(&self) -> bool {
        matches!(self, MoviesError::Status(_))
    }
}

/// Catalog API client
pub struct MoviesClient {
    url: String,
    client: reqwest::Client,
}

impl MoviesClient {
    /// Create a client for the default endpoint
    pub fn new() -> Self {
        Self::with_url(DEFAULT_MOVIES_URL)
    }

    /// Create a client with a custom endpoint (config override, tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Set an overall request timeout. Without one the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    /// Endpoint this client reads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full catalog
    pub async fn fetch_movies(&self) -> Result<Vec<Movie>, MoviesError> {
        info!(url = %self.url, "fetching movie catalog");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "catalog request rejected");
            return Err(MoviesError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let movies = parse_movies(&body)?;
        debug!(count = movies.len(), "catalog parsed");
        Ok(movies)
    }
}

impl Default for MoviesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a catalog body. Every record must carry `id`, `title` and `genre`.
pub fn parse_movies(body: &str) -> Result<Vec<Movie>, MoviesError> {
    serde_json::from_str(body)
        .map_err(|e| MoviesError::InvalidResponse(format!("JSON parse error: {}", e)))
}
