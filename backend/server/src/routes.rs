use std::sync::Arc;

use articles::{Article, DEFAULT_FEATURED_LIMIT, DEFAULT_TRENDING_LIMIT};
use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::AppError,
    query::{QueryMap, parse_article_filter, parse_limit},
    state::AppState,
    validate::{article_patch_from_body, new_article_from_body},
};

type Shared = State<Arc<AppState>>;

/// Ids are UUIDs, anything else cannot name a stored article.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        debug!("Unparseable article id {raw:?}");
        AppError::NotFound
    })
}

pub async fn list_articles_handler(
    State(state): Shared,
    query: Result<Query<QueryMap>, QueryRejection>,
) -> Result<Json<Vec<Article>>, AppError> {
    let Query(query) = query?;
    let filter = parse_article_filter(&query)?;
    debug!("Listing articles with {filter:?}");

    let articles = state
        .storage
        .list(&filter)
        .await
        .map_err(AppError::internal("fetch articles"))?;

    Ok(Json(articles))
}

pub async fn featured_articles_handler(
    State(state): Shared,
    query: Result<Query<QueryMap>, QueryRejection>,
) -> Result<Json<Vec<Article>>, AppError> {
    let Query(query) = query?;
    let limit = parse_limit(&query, DEFAULT_FEATURED_LIMIT)?;

    let articles = state
        .storage
        .featured(limit)
        .await
        .map_err(AppError::internal("fetch featured articles"))?;

    Ok(Json(articles))
}

pub async fn trending_articles_handler(
    State(state): Shared,
    query: Result<Query<QueryMap>, QueryRejection>,
) -> Result<Json<Vec<Article>>, AppError> {
    let Query(query) = query?;
    let limit = parse_limit(&query, DEFAULT_TRENDING_LIMIT)?;

    let articles = state
        .storage
        .trending(limit)
        .await
        .map_err(AppError::internal("fetch trending articles"))?;

    Ok(Json(articles))
}

/// Reading an article counts as a view, and the response already includes it.
pub async fn get_article_handler(
    State(state): Shared,
    Path(id): Path<String>,
) -> Result<Json<Article>, AppError> {
    let id = parse_id(&id)?;

    state
        .storage
        .increment_views(id)
        .await
        .map_err(AppError::internal("fetch article"))?;

    let article = state
        .storage
        .get(id)
        .await
        .map_err(AppError::internal("fetch article"))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(article))
}

pub async fn create_article_handler(
    State(state): Shared,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body?;
    let new = new_article_from_body(&body)?;

    let article = state
        .storage
        .create(new)
        .await
        .map_err(AppError::internal("create article"))?;

    info!("Created article {} in {}", article.id, article.category);

    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn update_article_handler(
    State(state): Shared,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Article>, AppError> {
    let body = body?;
    let patch = article_patch_from_body(&body)?;
    let id = parse_id(&id)?;

    let article = state
        .storage
        .update(id, patch)
        .await
        .map_err(AppError::internal("update article"))?
        .ok_or(AppError::NotFound)?;

    info!("Updated article {id}");

    Ok(Json(article))
}

pub async fn delete_article_handler(
    State(state): Shared,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;

    let deleted = state
        .storage
        .delete(id)
        .await
        .map_err(AppError::internal("delete article"))?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    info!("Deleted article {id}");

    Ok(Json(json!({ "message": "Article deleted successfully" })))
}

pub async fn like_article_handler(
    State(state): Shared,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;

    let article = state
        .storage
        .toggle_like(id)
        .await
        .map_err(AppError::internal("like article"))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "likes": article.likes })))
}

pub async fn dislike_article_handler(
    State(state): Shared,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;

    let article = state
        .storage
        .toggle_dislike(id)
        .await
        .map_err(AppError::internal("dislike article"))?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "dislikes": article.dislikes })))
}
