use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::{CachedSource, HttpImageProbe, HttpPostClient, ImageProbe, PostSource};

/// Everything the views need, resolved once at startup and shared by `Arc`.
pub struct AppContext {
    pub config: Arc<Config>,
    pub source: Arc<dyn PostSource>,
    pub images: Arc<dyn ImageProbe>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        if config.api.secret().is_none() {
            tracing::error!(
                "No project secret configured; post views will show a configuration error"
            );
        }
        if let Err(e) = config.home.install_fallback_image() {
            tracing::warn!("Fallback image unavailable: {}", e);
        }

        let http: Arc<dyn PostSource> = Arc::new(HttpPostClient::new(config.api.clone())?);
        let source: Arc<dyn PostSource> = match config.api.cache_ttl() {
            Some(ttl) => Arc::new(CachedSource::new(http, ttl)),
            None => http,
        };
        let images: Arc<dyn ImageProbe> = Arc::new(HttpImageProbe::new(
            config.home.fallback_image.clone(),
            config.api.timeout(),
        )?);

        Ok(Self::with_parts(config, source, images))
    }

    pub fn with_parts(
        config: Config,
        source: Arc<dyn PostSource>,
        images: Arc<dyn ImageProbe>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            source,
            images,
        }
    }
}
