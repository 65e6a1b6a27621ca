use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::app::{FrontpageError, Result};
use crate::config::ApiConfig;
use crate::domain::Post;
use crate::fetcher::PostSource;

const COLLECTION: &str = "post";

/// [`PostSource`] backed by the hosted REST API.
pub struct HttpPostClient {
    client: Client,
    config: ApiConfig,
}

impl HttpPostClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("frontpage/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn collection_url(&self) -> Result<Url> {
        self.url_with(&[COLLECTION])
    }

    fn item_url(&self, id: &str) -> Result<Url> {
        self.url_with(&[COLLECTION, id])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                FrontpageError::Config(format!("Bad API endpoint: {}", self.config.endpoint))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", url, status);
            return Err(FrontpageError::Request {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Unexpected body from {}: {}", url, e);
            FrontpageError::Parse(e)
        })
    }
}

#[async_trait]
impl PostSource for HttpPostClient {
    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        let url = self.collection_url()?;
        let posts: Vec<Post> = self.get_json(url).await?;
        tracing::info!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn get_post(&self, id: &str) -> Result<Post> {
        let url = self.item_url(id)?;
        self.get_json(url).await
    }

    fn post_url(&self, id: &str) -> Result<Url> {
        self.item_url(id)
    }
}
