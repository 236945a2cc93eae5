//! # In-memory store
//!
//! Articles live in a single map owned by the store instance. Nothing survives
//! a restart.
//!
//! ## Ordering
//!
//! - Every article gets an insertion sequence number on creation
//! - Newest-first listings sort by `created_at`, insertion order breaks ties
//! - Trending sorts by `views`, earlier insertions win ties
//!
//! ## Locking
//!
//! One `RwLock` around the whole map. Guards are never held across an await.
use std::{
    cmp::Reverse,
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::{
    model::{Article, ArticleFilter, ArticlePatch, NewArticle},
    seed::sample_articles,
    storage::{Storage, StoreError},
};

struct StoredArticle {
    seq: u64,
    article: Article,
}

#[derive(Default)]
struct Articles {
    by_id: HashMap<Uuid, StoredArticle>,
    next_seq: u64,
}

impl Articles {
    fn insert(&mut self, new: NewArticle, now: DateTime<Utc>) -> Article {
        let mut id = Uuid::new_v4();
        while self.by_id.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let article = Article::from_new(id, new, now);
        let seq = self.next_seq;
        self.next_seq += 1;

        self.by_id.insert(
            id,
            StoredArticle {
                seq,
                article: article.clone(),
            },
        );

        article
    }

    fn modify(
        &mut self,
        id: Uuid,
        now: DateTime<Utc>,
        change: impl FnOnce(&mut Article),
    ) -> Option<Article> {
        let stored = self.by_id.get_mut(&id)?;
        change(&mut stored.article);
        stored.article.touch(now);

        Some(stored.article.clone())
    }

    fn newest_first<'a>(&'a self, keep: impl Fn(&Article) -> bool) -> Vec<&'a StoredArticle> {
        let mut matching: Vec<&StoredArticle> = self
            .by_id
            .values()
            .filter(|stored| keep(&stored.article))
            .collect();

        matching.sort_by_key(|stored| (Reverse(stored.article.created_at), stored.seq));
        matching
    }
}

#[derive(Default)]
pub struct MemStorage {
    articles: RwLock<Articles>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the site's sample articles. They share one
    /// creation time, so the feed lists them in seed order.
    pub fn seeded() -> Self {
        let mut articles = Articles::default();
        let now = Utc::now();
        for new in sample_articles() {
            articles.insert(new, now);
        }

        debug!("Seeded {} sample articles", articles.by_id.len());

        Self {
            articles: RwLock::new(articles),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Articles>, StoreError> {
        self.articles.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Articles>, StoreError> {
        self.articles.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>, StoreError> {
        let articles = self.read()?;

        Ok(articles
            .newest_first(|article| filter.matches(article))
            .into_iter()
            .map(|stored| stored.article.clone())
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Article>, StoreError> {
        let articles = self.read()?;

        Ok(articles.by_id.get(&id).map(|stored| stored.article.clone()))
    }

    async fn create(&self, article: NewArticle) -> Result<Article, StoreError> {
        let mut articles = self.write()?;

        Ok(articles.insert(article, Utc::now()))
    }

    async fn update(&self, id: Uuid, patch: ArticlePatch) -> Result<Option<Article>, StoreError> {
        let mut articles = self.write()?;

        Ok(articles.modify(id, Utc::now(), |article| patch.apply(article)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut articles = self.write()?;

        Ok(articles.by_id.remove(&id).is_some())
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), StoreError> {
        let mut articles = self.write()?;
        articles.modify(id, Utc::now(), |article| {
            article.views = article.views.saturating_add(1)
        });

        Ok(())
    }

    async fn toggle_like(&self, id: Uuid) -> Result<Option<Article>, StoreError> {
        let mut articles = self.write()?;

        Ok(articles.modify(id, Utc::now(), |article| {
            article.likes = article.likes.saturating_add(1)
        }))
    }

    async fn toggle_dislike(&self, id: Uuid) -> Result<Option<Article>, StoreError> {
        let mut articles = self.write()?;

        Ok(articles.modify(id, Utc::now(), |article| {
            article.dislikes = article.dislikes.saturating_add(1)
        }))
    }

    async fn trending(&self, limit: usize) -> Result<Vec<Article>, StoreError> {
        let articles = self.read()?;

        let mut published: Vec<&StoredArticle> = articles
            .by_id
            .values()
            .filter(|stored| stored.article.is_published())
            .collect();
        published.sort_by_key(|stored| (Reverse(stored.article.views), stored.seq));

        Ok(published
            .into_iter()
            .take(limit)
            .map(|stored| stored.article.clone())
            .collect())
    }

    async fn featured(&self, limit: usize) -> Result<Vec<Article>, StoreError> {
        let articles = self.read()?;

        Ok(articles
            .newest_first(|article| article.is_published() && article.featured)
            .into_iter()
            .take(limit)
            .map(|stored| stored.article.clone())
            .collect())
    }
}
