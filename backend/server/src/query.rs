use std::collections::HashMap;

use articles::ArticleFilter;

use crate::{error::AppError, validate::FieldError};

pub type QueryMap = HashMap<String, String>;

/// Query of `GET /api/articles`.
pub fn parse_article_filter(query: &QueryMap) -> Result<ArticleFilter, AppError> {
    let featured = match query.get("featured").map(String::as_str) {
        None => None,
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(raw) => {
            return Err(invalid_param(
                "featured",
                format!("Expected 'true' or 'false', received '{raw}'"),
            ));
        }
    };

    Ok(ArticleFilter {
        category: non_empty(query, "category"),
        status: non_empty(query, "status"),
        featured,
    })
}

/// `limit` of the featured and trending listings.
pub fn parse_limit(query: &QueryMap, default_limit: usize) -> Result<usize, AppError> {
    let Some(raw) = query.get("limit") else {
        return Ok(default_limit);
    };

    raw.trim().parse::<usize>().map_err(|_| {
        invalid_param(
            "limit",
            format!("Expected a non-negative integer, received '{raw}'"),
        )
    })
}

fn non_empty(query: &QueryMap, name: &str) -> Option<String> {
    query.get(name).filter(|value| !value.is_empty()).cloned()
}

fn invalid_param(name: &str, message: String) -> AppError {
    AppError::InvalidQuery(vec![FieldError::new(name, "invalid_type", message)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_has_no_filters() {
        assert_eq!(
            parse_article_filter(&query(&[])).unwrap(),
            ArticleFilter::default()
        );
    }

    #[test]
    fn test_filter_values() {
        let filter = parse_article_filter(&query(&[
            ("category", "reviews"),
            ("status", "all"),
            ("featured", "true"),
        ]))
        .unwrap();

        assert_eq!(filter.category.as_deref(), Some("reviews"));
        assert_eq!(filter.status.as_deref(), Some("all"));
        assert_eq!(filter.featured, Some(true));
    }

    #[test]
    fn test_empty_values_ignored() {
        let filter = parse_article_filter(&query(&[("category", ""), ("status", "")])).unwrap();

        assert_eq!(filter, ArticleFilter::default());
    }

    #[test]
    fn test_featured_must_be_boolean() {
        assert!(matches!(
            parse_article_filter(&query(&[("featured", "yes")])),
            Err(AppError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_limit() {
        assert_eq!(parse_limit(&query(&[]), 5).unwrap(), 5);
        assert_eq!(parse_limit(&query(&[("limit", "2")]), 5).unwrap(), 2);
        assert_eq!(parse_limit(&query(&[("limit", "0")]), 5).unwrap(), 0);
        assert!(parse_limit(&query(&[("limit", "-1")]), 5).is_err());
        assert!(parse_limit(&query(&[("limit", "ten")]), 5).is_err());
    }
}
