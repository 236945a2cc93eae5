use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Article, ArticleFilter, ArticlePatch, NewArticle};

pub const DEFAULT_TRENDING_LIMIT: usize = 5;
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("article store lock poisoned")]
    Poisoned,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Article persistence contract shared by every backend.
///
/// Absence is not an error: lookups return `None` (or `false` for
/// [`Storage::delete`]) and only genuine backend failures surface as
/// [`StoreError`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Matching articles, newest `created_at` first.
    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Article>, StoreError>;

    async fn create(&self, article: NewArticle) -> Result<Article, StoreError>;

    async fn update(&self, id: Uuid, patch: ArticlePatch) -> Result<Option<Article>, StoreError>;

    /// Returns whether an article was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Silently ignores unknown ids.
    async fn increment_views(&self, id: Uuid) -> Result<(), StoreError>;

    /// Adds one like. There is no per-reader state, so repeated calls keep
    /// counting up.
    async fn toggle_like(&self, id: Uuid) -> Result<Option<Article>, StoreError>;

    /// Adds one dislike, see [`Storage::toggle_like`].
    async fn toggle_dislike(&self, id: Uuid) -> Result<Option<Article>, StoreError>;

    /// Published articles by views, highest first.
    async fn trending(&self, limit: usize) -> Result<Vec<Article>, StoreError>;

    /// Published, featured articles, newest first.
    async fn featured(&self, limit: usize) -> Result<Vec<Article>, StoreError>;
}
