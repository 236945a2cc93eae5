use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_AUTHOR: &str = "Admin";
pub const DEFAULT_READ_TIME: u32 = 5;

/// Sentinel accepted by list filters meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub author: String,
    pub status: Status,
    pub likes: u32,
    pub dislikes: u32,
    pub views: u32,
    pub read_time: u32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn from_new(id: Uuid, new: NewArticle, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            excerpt: new.excerpt,
            content: new.content,
            category: new.category,
            image_url: new.image_url,
            author: new.author,
            status: new.status,
            likes: new.likes,
            dislikes: new.dislikes,
            views: new.views,
            read_time: new.read_time,
            featured: new.featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`, never letting it fall behind `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    #[default]
    Published,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Draft, Status::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Published => "published",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sections of the site. Articles store their category as plain text, this
/// enum only describes the values the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CarNews,
    BikeNews,
    Reviews,
    Technology,
    Industry,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CarNews,
        Category::BikeNews,
        Category::Reviews,
        Category::Technology,
        Category::Industry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CarNews => "car-news",
            Category::BikeNews => "bike-news",
            Category::Reviews => "reviews",
            Category::Technology => "technology",
            Category::Industry => "industry",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating an article, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub author: String,
    pub status: Status,
    pub likes: u32,
    pub dislikes: u32,
    pub views: u32,
    pub read_time: u32,
    pub featured: bool,
}

impl NewArticle {
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            content: content.into(),
            category: category.into(),
            image_url: image_url.into(),
            author: DEFAULT_AUTHOR.to_string(),
            status: Status::default(),
            likes: 0,
            dislikes: 0,
            views: 0,
            read_time: DEFAULT_READ_TIME,
            featured: false,
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub status: Option<Status>,
    pub likes: Option<u32>,
    pub dislikes: Option<u32>,
    pub views: Option<u32>,
    pub read_time: Option<u32>,
    pub featured: Option<bool>,
}

impl ArticlePatch {
    pub fn apply(self, article: &mut Article) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut article.title, self.title);
        merge(&mut article.excerpt, self.excerpt);
        merge(&mut article.content, self.content);
        merge(&mut article.category, self.category);
        merge(&mut article.image_url, self.image_url);
        merge(&mut article.author, self.author);
        merge(&mut article.status, self.status);
        merge(&mut article.likes, self.likes);
        merge(&mut article.dislikes, self.dislikes);
        merge(&mut article.views, self.views);
        merge(&mut article.read_time, self.read_time);
        merge(&mut article.featured, self.featured);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        text_matches(self.category.as_deref(), &article.category)
            && text_matches(self.status.as_deref(), article.status.as_str())
            && self.featured.is_none_or(|featured| article.featured == featured)
    }
}

fn text_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None | Some("") | Some(ALL) => true,
        Some(wanted) => wanted == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        let new = NewArticle::new("T", "E", "C", "car-news", "http://x/img.jpg");
        Article::from_new(Uuid::new_v4(), new, Utc::now())
    }

    #[test]
    fn test_new_article_defaults() {
        let new = NewArticle::new("T", "E", "C", "reviews", "http://x/img.jpg");

        assert_eq!(new.author, "Admin");
        assert_eq!(new.status, Status::Published);
        assert_eq!((new.likes, new.dislikes, new.views), (0, 0, 0));
        assert_eq!(new.read_time, 5);
        assert!(!new.featured);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(article()).unwrap();

        assert_eq!(json["imageUrl"], "http://x/img.jpg");
        assert_eq!(json["readTime"], 5);
        assert_eq!(json["status"], "published");
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut updated = article();
        let before = updated.clone();

        ArticlePatch {
            title: Some("New title".to_string()),
            featured: Some(true),
            ..Default::default()
        }
        .apply(&mut updated);

        assert_eq!(updated.title, "New title");
        assert!(updated.featured);
        assert_eq!(updated.excerpt, before.excerpt);
        assert_eq!(updated.category, before.category);
        assert_eq!(updated.status, before.status);
        assert_eq!(updated.read_time, before.read_time);
    }

    #[test]
    fn test_touch_never_precedes_creation() {
        let mut article = article();
        let earlier = article.created_at - chrono::Duration::seconds(30);

        article.touch(earlier);

        assert_eq!(article.updated_at, article.created_at);
    }

    #[test]
    fn test_filter_all_sentinel() {
        let article = article();
        let filter = ArticleFilter {
            category: Some("all".to_string()),
            status: Some("all".to_string()),
            featured: None,
        };

        assert!(filter.matches(&article));
    }

    #[test]
    fn test_filter_exact_match() {
        let article = article();

        let by_category = ArticleFilter {
            category: Some("bike-news".to_string()),
            ..Default::default()
        };
        let by_status = ArticleFilter {
            status: Some("draft".to_string()),
            ..Default::default()
        };
        let by_featured = ArticleFilter {
            featured: Some(false),
            ..Default::default()
        };

        assert!(!by_category.matches(&article));
        assert!(!by_status.matches(&article));
        assert!(by_featured.matches(&article));
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(Category::parse("bike-news"), Some(Category::BikeNews));
        assert_eq!(Category::parse("Bike News"), None);
        assert_eq!(Status::parse("draft"), Some(Status::Draft));
        assert_eq!(Status::parse("archived"), None);
        assert_eq!(
            serde_json::to_value(Category::CarNews).unwrap(),
            serde_json::json!("car-news")
        );
    }
}
