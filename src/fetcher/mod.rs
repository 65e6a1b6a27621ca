pub mod cached;
pub mod http_fetcher;
pub mod image;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;
use crate::domain::Post;

pub use cached::CachedSource;
pub use http_fetcher::HttpPostClient;
pub use image::{HttpImageProbe, ImageProbe, ImageSource};

pub const DEFAULT_RECENT_LIMIT: usize = 3;
pub const DEFAULT_FEATURED_SKIP: usize = 3;
pub const DEFAULT_FEATURED_LIMIT: usize = 5;

/// Read-only access to the remote post collection.
///
/// The API has no server-side paging, so the recent and featured views
/// always fetch the whole collection and slice it by position.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn get_all_posts(&self) -> Result<Vec<Post>>;

    async fn get_post(&self, id: &str) -> Result<Post>;

    async fn get_recent_posts(&self, limit: usize) -> Result<Vec<Post>> {
        Ok(recent_slice(self.get_all_posts().await?, limit))
    }

    async fn get_featured_posts(&self, skip: usize, limit: usize) -> Result<Vec<Post>> {
        Ok(featured_slice(self.get_all_posts().await?, skip, limit))
    }

    /// Canonical URL of a single post, used when sharing.
    fn post_url(&self, id: &str) -> Result<Url>;

    /// Drop any locally held copy of the collection.
    fn invalidate(&self) {}
}

/// The first `limit` elements, in backend order.
pub fn recent_slice<T>(items: Vec<T>, limit: usize) -> Vec<T> {
    items.into_iter().take(limit).collect()
}

/// Elements `[skip, skip + limit)`; empty when `skip` is past the end.
pub fn featured_slice<T>(items: Vec<T>, skip: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(skip).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FrontpageError;

    struct FixedSource(Vec<Post>);

    fn post(id: usize) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {}", id),
            content: String::new(),
            image: String::new(),
            created_at: "2024-01-05T00:00:00Z".into(),
        }
    }

    #[async_trait]
    impl PostSource for FixedSource {
        async fn get_all_posts(&self) -> Result<Vec<Post>> {
            Ok(self.0.clone())
        }

        async fn get_post(&self, id: &str) -> Result<Post> {
            self.0
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(FrontpageError::Request {
                    status: 404,
                    reason: "Not Found".into(),
                })
        }

        fn post_url(&self, id: &str) -> Result<Url> {
            Ok(Url::parse("https://example.com/api/post/")?.join(id)?)
        }
    }

    #[test]
    fn test_recent_slice_is_prefix() {
        let all: Vec<_> = (1..=10).collect();
        assert_eq!(recent_slice(all.clone(), 3), vec![1, 2, 3]);
        assert_eq!(recent_slice(all.clone(), 0), Vec::<i32>::new());
        assert_eq!(recent_slice(all.clone(), 50), all);
    }

    #[test]
    fn test_featured_slice_window() {
        let all: Vec<_> = (0..10).collect();
        assert_eq!(featured_slice(all.clone(), 3, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(featured_slice(all.clone(), 8, 5), vec![8, 9]);
        assert!(featured_slice(all.clone(), 10, 5).is_empty());
        assert!(featured_slice(all, 42, 5).is_empty());
    }

    #[test]
    fn test_provided_methods_slice_full_collection() {
        let source = FixedSource((0..7).map(post).collect());

        let recent = tokio_test::block_on(source.get_recent_posts(DEFAULT_RECENT_LIMIT)).unwrap();
        let ids: Vec<_> = recent.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2"]);

        let featured = tokio_test::block_on(
            source.get_featured_posts(DEFAULT_FEATURED_SKIP, DEFAULT_FEATURED_LIMIT),
        )
        .unwrap();
        let ids: Vec<_> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "4", "5", "6"]);
    }

    #[test]
    fn test_featured_on_short_collection_is_empty() {
        let source = FixedSource((0..2).map(post).collect());
        let featured = tokio_test::block_on(source.get_featured_posts(3, 5)).unwrap();
        assert!(featured.is_empty());
    }
}
