//! # Articles
//!
//! Data model and storage for RevLimits news articles.
//!
//! ## Schema
//! - Id: UUID v4 assigned by the store, never reused
//! - Text: title, excerpt, content, category, imageUrl, author (default "Admin")
//! - Status: draft or published (default published)
//! - Counters: likes, dislikes, views, all starting at 0 and only ever counting up
//! - readTime in minutes (default 5), featured flag (default false)
//! - createdAt set once, updatedAt refreshed on every change including counters
//!
//! ## Backends
//! Route handlers only see the [`Storage`] trait. [`MemStorage`] is the one
//! backend today; a persistent one can slot in behind the same trait.
pub mod memory;
pub mod model;
pub mod seed;
pub mod storage;

pub use memory::MemStorage;
pub use model::{Article, ArticleFilter, ArticlePatch, Category, NewArticle, Status};
pub use storage::{DEFAULT_FEATURED_LIMIT, DEFAULT_TRENDING_LIMIT, Storage, StoreError};
