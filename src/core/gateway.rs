//! Read-only client for the aggregation backend.
//!
//! The backend exposes four GET endpoints:
//! - `/api/health` - whether the AI search backend is configured
//! - `/api/categories` - category identifiers in display order
//! - `/api/aggregates?category=...` - articles for a category
//! - `/api/search?q=...` - articles matching a free-text query
//!
//! Listing endpoints wrap their payload in a `{ success, ... }` envelope. A
//! `success: false` envelope is reported as [`GatewayError::Rejected`] so the
//! caller can treat it exactly like a transport failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::Article;

/// Base URL used when nothing else is configured (the backend's dev server).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/";

const HEALTH_PATH: &str = "api/health";
const CATEGORIES_PATH: &str = "api/categories";
const AGGREGATES_PATH: &str = "api/aggregates";
const SEARCH_PATH: &str = "api/search";

/// Failure of a gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request could not be sent or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success HTTP status.
    #[error("server responded with HTTP {0}")]
    Status(u16),
    /// The response envelope carried `success: false`.
    #[error("server reported an unsuccessful response")]
    Rejected,
    /// An endpoint URL could not be built from the base URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result of the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Health {
    /// Whether AI-assisted search is available.
    pub ai_available: bool,
}

/// Source of categories and articles.
///
/// The browser only talks to the backend through this trait so tests can
/// substitute canned responses.
#[async_trait]
pub trait NewsGateway: Send + Sync {
    /// Lists the category identifiers in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    async fn list_categories(&self) -> Result<Vec<String>, GatewayError>;

    /// Probes whether the AI search backend is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable.
    async fn health(&self) -> Result<Health, GatewayError>;

    /// Lists aggregated articles for a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    async fn list_articles_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Article>, GatewayError>;

    /// Searches articles by free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or rejects the request.
    async fn search_articles(&self, query: &str) -> Result<Vec<Article>, GatewayError>;
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    gemini_available: bool,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    success: bool,
    #[serde(default)]
    categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    success: bool,
    #[serde(default)]
    data: Vec<Article>,
}

/// [`NewsGateway`] backed by HTTP requests to the aggregation backend.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Creates a gateway for the backend at `base_url`.
    ///
    /// A trailing slash is added when missing so that endpoint paths are
    /// appended to the base path instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(concat!("articlehub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the URL for an endpoint, appending and encoding a query pair.
    pub(crate) fn endpoint(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<Url, GatewayError> {
        let mut url = self.base_url.join(path)?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }

    async fn get_articles(&self, url: Url) -> Result<Vec<Article>, GatewayError> {
        let body: ArticlesResponse = self.get_json(url).await?;
        if !body.success {
            return Err(GatewayError::Rejected);
        }
        Ok(body.data)
    }
}

#[async_trait]
impl NewsGateway for HttpGateway {
    async fn list_categories(&self) -> Result<Vec<String>, GatewayError> {
        let url = self.endpoint(CATEGORIES_PATH, None)?;
        let body: CategoriesResponse = self.get_json(url).await?;
        if !body.success {
            return Err(GatewayError::Rejected);
        }
        Ok(body.categories)
    }

    async fn health(&self) -> Result<Health, GatewayError> {
        let url = self.endpoint(HEALTH_PATH, None)?;
        let body: HealthResponse = self.get_json(url).await?;
        Ok(Health {
            ai_available: body.gemini_available,
        })
    }

    async fn list_articles_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Article>, GatewayError> {
        let url = self.endpoint(AGGREGATES_PATH, Some(("category", category)))?;
        self.get_articles(url).await
    }

    async fn search_articles(&self, query: &str) -> Result<Vec<Article>, GatewayError> {
        let url = self.endpoint(SEARCH_PATH, Some(("q", query)))?;
        self.get_articles(url).await
    }
}
