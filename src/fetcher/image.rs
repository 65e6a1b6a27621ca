use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;

/// Where a post image is actually displayed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Fallback(PathBuf),
}

impl ImageSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageSource::Fallback(_))
    }

    /// Something `open::that` can show: a URL or a local path.
    pub fn target(&self) -> String {
        match self {
            ImageSource::Remote(url) => url.clone(),
            ImageSource::Fallback(path) => path.display().to_string(),
        }
    }
}

/// Checks whether a remote image can be loaded.
///
/// Resolution never fails: anything unloadable maps to the fallback.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn resolve(&self, url: &str) -> ImageSource;

    fn fallback(&self) -> ImageSource;
}

pub struct HttpImageProbe {
    client: Client,
    fallback: PathBuf,
}

impl HttpImageProbe {
    pub fn new(fallback: PathBuf, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("frontpage/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, fallback })
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn resolve(&self, url: &str) -> ImageSource {
        let parsed = match Url::parse(url.trim()) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => u,
            _ => {
                tracing::debug!("Image URL {:?} is not loadable, using fallback", url);
                return self.fallback();
            }
        };

        match self.client.get(parsed).send().await {
            Ok(response) if response.status().is_success() => {
                ImageSource::Remote(url.trim().to_string())
            }
            Ok(response) => {
                tracing::debug!("Image {} returned {}, using fallback", url, response.status());
                self.fallback()
            }
            Err(e) => {
                tracing::debug!("Image {} failed to load: {}, using fallback", url, e);
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> ImageSource {
        ImageSource::Fallback(self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> HttpImageProbe {
        HttpImageProbe::new(PathBuf::from("/tmp/fallback.svg"), Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn test_empty_url_falls_back() {
        let source = probe().resolve("").await;
        assert_eq!(source, ImageSource::Fallback(PathBuf::from("/tmp/fallback.svg")));
        assert!(source.is_fallback());
    }

    #[tokio::test]
    async fn test_non_http_scheme_falls_back() {
        assert!(probe().resolve("ftp://example.com/a.jpg").await.is_fallback());
        assert!(probe().resolve("not a url").await.is_fallback());
    }

    #[test]
    fn test_target() {
        assert_eq!(
            ImageSource::Remote("https://x/a.jpg".into()).target(),
            "https://x/a.jpg"
        );
        assert_eq!(
            ImageSource::Fallback(PathBuf::from("/a/b.svg")).target(),
            "/a/b.svg"
        );
    }
}
