//! Shared cache for the "all posts" collection.
//!
//! Every homepage region slices the same collection, so the views share one
//! response for a short TTL instead of each issuing its own GET.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use url::Url;

use crate::app::Result;
use crate::domain::Post;
use crate::fetcher::PostSource;

struct Entry {
    posts: Vec<Post>,
    fetched_at: Instant,
    epoch: u64,
}

pub struct CachedSource {
    inner: Arc<dyn PostSource>,
    ttl: Duration,
    entry: Mutex<Option<Entry>>,
    epoch: AtomicU64,
}

impl CachedSource {
    pub fn new(inner: Arc<dyn PostSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: Mutex::new(None),
            epoch: AtomicU64::new(0),
        }
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        entry.epoch == self.epoch.load(Ordering::Acquire) && entry.fetched_at.elapsed() < self.ttl
    }
}

#[async_trait]
impl PostSource for CachedSource {
    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        // Held across the fetch so concurrent misses share one request.
        let mut entry = self.entry.lock().await;
        if let Some(cached) = entry.as_ref().filter(|e| self.is_fresh(e)) {
            tracing::debug!("Serving {} posts from cache", cached.posts.len());
            return Ok(cached.posts.clone());
        }

        let epoch = self.epoch.load(Ordering::Acquire);
        let posts = self.inner.get_all_posts().await?;
        *entry = Some(Entry {
            posts: posts.clone(),
            fetched_at: Instant::now(),
            epoch,
        });
        Ok(posts)
    }

    async fn get_post(&self, id: &str) -> Result<Post> {
        self.inner.get_post(id).await
    }

    fn post_url(&self, id: &str) -> Result<Url> {
        self.inner.post_url(id)
    }

    fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.inner.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use crate::app::FrontpageError;

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl PostSource for CountingSource {
        async fn get_all_posts(&self) -> Result<Vec<Post>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(FrontpageError::Request {
                    status: 500,
                    reason: "Internal Server Error".into(),
                });
            }
            tokio::task::yield_now().await;
            Ok(vec![Post {
                id: n.to_string(),
                title: "t".into(),
                content: String::new(),
                image: String::new(),
                created_at: String::new(),
            }])
        }

        async fn get_post(&self, _id: &str) -> Result<Post> {
            unreachable!("not used")
        }

        fn post_url(&self, id: &str) -> Result<Url> {
            Ok(Url::parse("https://example.com/post/")?.join(id)?)
        }
    }

    fn cached(ttl: Duration) -> (Arc<CountingSource>, CachedSource) {
        let inner = Arc::new(CountingSource::default());
        let cache = CachedSource::new(inner.clone(), ttl);
        (inner, cache)
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let (inner, cache) = cached(Duration::from_secs(60));
        let first = cache.get_all_posts().await.unwrap();
        let second = cache.get_recent_posts(3).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let (inner, cache) = cached(Duration::from_secs(60));
        cache.get_all_posts().await.unwrap();
        cache.invalidate();
        let posts = cache.get_all_posts().await.unwrap();
        assert_eq!(posts[0].id, "1");
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_never_hits() {
        let (inner, cache) = cached(Duration::ZERO);
        cache.get_all_posts().await.unwrap();
        cache.get_all_posts().await.unwrap();
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let (inner, cache) = cached(Duration::from_secs(60));
        inner.fail.store(true, Ordering::SeqCst);
        assert!(cache.get_all_posts().await.is_err());

        inner.fail.store(false, Ordering::SeqCst);
        assert!(cache.get_all_posts().await.is_ok());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_request() {
        let (inner, cache) = cached(Duration::from_secs(60));
        let cache = Arc::new(cache);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.get_all_posts().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }
}
