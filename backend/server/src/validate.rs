use std::borrow::Cow;

use articles::{ArticlePatch, Category, NewArticle, Status};
use axum::body::Bytes;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned, de::Error as _};
use tracing::warn;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

/// Wire names in the order errors are reported.
const FIELD_ORDER: [&str; 12] = [
    "title",
    "excerpt",
    "content",
    "category",
    "imageUrl",
    "author",
    "status",
    "likes",
    "dislikes",
    "views",
    "readTime",
    "featured",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: Vec<String>,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            path: if field.is_empty() {
                Vec::new()
            } else {
                vec![field.to_string()]
            },
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Body of `POST /api/articles`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateArticleRequest {
    #[validate(
        required(code = "invalid_type", message = "Required"),
        length(
            min = 1,
            code = "too_small",
            message = "String must contain at least 1 character(s)"
        )
    )]
    title: Option<String>,

    #[validate(
        required(code = "invalid_type", message = "Required"),
        length(
            min = 1,
            code = "too_small",
            message = "String must contain at least 1 character(s)"
        )
    )]
    excerpt: Option<String>,

    #[validate(
        required(code = "invalid_type", message = "Required"),
        length(
            min = 1,
            code = "too_small",
            message = "String must contain at least 1 character(s)"
        )
    )]
    content: Option<String>,

    #[validate(
        required(code = "invalid_type", message = "Required"),
        custom(function = "known_category")
    )]
    category: Option<String>,

    #[validate(
        required(code = "invalid_type", message = "Required"),
        url(code = "invalid_string", message = "Invalid url")
    )]
    image_url: Option<String>,

    #[validate(length(
        min = 1,
        code = "too_small",
        message = "String must contain at least 1 character(s)"
    ))]
    author: Option<String>,

    #[validate(custom(function = "known_status"))]
    status: Option<String>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 4294967295_i64))]
    likes: Option<i64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 4294967295_i64))]
    dislikes: Option<i64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 4294967295_i64))]
    views: Option<i64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 1, max = 4294967295_i64))]
    read_time: Option<i64>,

    featured: Option<bool>,
}

/// Body of `PUT /api/articles/{id}`. Same rules as creation, nothing required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateArticleRequest {
    #[validate(length(
        min = 1,
        code = "too_small",
        message = "String must contain at least 1 character(s)"
    ))]
    title: Option<String>,

    #[validate(length(
        min = 1,
        code = "too_small",
        message = "String must contain at least 1 character(s)"
    ))]
    excerpt: Option<String>,

    #[validate(length(
        min = 1,
        code = "too_small",
        message = "String must contain at least 1 character(s)"
    ))]
    content: Option<String>,

    #[validate(custom(function = "known_category"))]
    category: Option<String>,

    #[validate(url(code = "invalid_string", message = "Invalid url"))]
    image_url: Option<String>,

    #[validate(length(
        min = 1,
        code = "too_small",
        message = "String must contain at least 1 character(s)"
    ))]
    author: Option<String>,

    #[validate(custom(function = "known_status"))]
    status: Option<String>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 4294967295_i64))]
    likes: Option<i64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 4294967295_i64))]
    dislikes: Option<i64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 4294967295_i64))]
    views: Option<i64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 1, max = 4294967295_i64))]
    read_time: Option<i64>,

    featured: Option<bool>,
}

pub fn new_article_from_body(body: &Bytes) -> Result<NewArticle, AppError> {
    let request: CreateArticleRequest = checked(body)?;

    let CreateArticleRequest {
        title: Some(title),
        excerpt: Some(excerpt),
        content: Some(content),
        category: Some(category),
        image_url: Some(image_url),
        author,
        status,
        likes,
        dislikes,
        views,
        read_time,
        featured,
    } = request
    else {
        return Err(rejected(vec![FieldError::new("", "invalid_type", "Required")]));
    };

    let mut new = NewArticle::new(title, excerpt, content, category, image_url);
    if let Some(author) = author {
        new.author = author;
    }
    if let Some(status) = status.as_deref().and_then(Status::parse) {
        new.status = status;
    }
    new.likes = counter(likes).unwrap_or(new.likes);
    new.dislikes = counter(dislikes).unwrap_or(new.dislikes);
    new.views = counter(views).unwrap_or(new.views);
    new.read_time = counter(read_time).unwrap_or(new.read_time);
    new.featured = featured.unwrap_or(new.featured);

    Ok(new)
}

pub fn article_patch_from_body(body: &Bytes) -> Result<ArticlePatch, AppError> {
    let request: UpdateArticleRequest = checked(body)?;

    Ok(ArticlePatch {
        title: request.title,
        excerpt: request.excerpt,
        content: request.content,
        category: request.category,
        image_url: request.image_url,
        author: request.author,
        status: request.status.as_deref().and_then(Status::parse),
        likes: counter(request.likes),
        dislikes: counter(request.dislikes),
        views: counter(request.views),
        read_time: counter(request.read_time),
        featured: request.featured,
    })
}

/// Decodes the body, then runs every field rule so all violations are
/// reported together.
fn checked<T: DeserializeOwned + Validate>(body: &Bytes) -> Result<T, AppError> {
    let request: T = serde_json::from_slice(body).map_err(|e| rejected(vec![decode_error(&e)]))?;
    request
        .validate()
        .map_err(|errors| rejected(field_errors(&errors)))?;

    Ok(request)
}

fn rejected(errors: Vec<FieldError>) -> AppError {
    warn!("Rejected article payload with {} error(s)", errors.len());

    AppError::InvalidArticle(errors)
}

fn counter(value: Option<i64>) -> Option<u32> {
    value.and_then(|value| u32::try_from(value).ok())
}

/// Accepts any JSON number without a fractional part, so `5` and `5.0` are
/// the same count.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(number) if number.is_finite() && number.fract() == 0.0 => Ok(Some(number as i64)),
        Some(number) => Err(D::Error::custom(format!(
            "Expected integer, received float {number}"
        ))),
    }
}

fn known_category(raw: &str) -> Result<(), ValidationError> {
    match Category::parse(raw) {
        Some(_) => Ok(()),
        None => Err(unknown_variant(
            Category::ALL.iter().map(Category::as_str),
            raw,
        )),
    }
}

fn known_status(raw: &str) -> Result<(), ValidationError> {
    match Status::parse(raw) {
        Some(_) => Ok(()),
        None => Err(unknown_variant(Status::ALL.iter().map(Status::as_str), raw)),
    }
}

fn unknown_variant<'a>(options: impl Iterator<Item = &'a str>, raw: &str) -> ValidationError {
    let expected = options
        .map(|option| format!("'{option}'"))
        .collect::<Vec<_>>()
        .join(" | ");

    ValidationError::new("invalid_enum_value").with_message(Cow::Owned(format!(
        "Invalid enum value. Expected {expected}, received '{raw}'"
    )))
}

/// Flattens validator output into wire-named field errors, ordered the way
/// the article schema lists its fields.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flat: Vec<(usize, FieldError)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let name = wire_name(&field);
            let rank = FIELD_ORDER
                .iter()
                .position(|known| *known == name)
                .unwrap_or(FIELD_ORDER.len());

            errors
                .iter()
                .map(move |error| (rank, describe(&name, error)))
                .collect::<Vec<_>>()
        })
        .collect();

    flat.sort_by_key(|(rank, _)| *rank);
    flat.into_iter().map(|(_, error)| error).collect()
}

fn describe(field: &str, error: &ValidationError) -> FieldError {
    if error.code == "range" {
        let param = |key: &str| error.params.get(key).and_then(|value| value.as_f64());

        return match (param("value"), param("min"), param("max")) {
            (Some(value), Some(min), _) if value < min => FieldError::new(
                field,
                "too_small",
                format!("Number must be greater than or equal to {min}"),
            ),
            (_, _, max) => FieldError::new(
                field,
                "too_big",
                format!(
                    "Number must be less than or equal to {}",
                    max.unwrap_or(f64::from(u32::MAX))
                ),
            ),
        };
    }

    let message = error
        .message
        .as_deref()
        .unwrap_or(error.code.as_ref())
        .to_string();

    FieldError::new(field, &error.code, message)
}

/// `image_url` -> `imageUrl`
fn wire_name(field: &str) -> String {
    let mut parts = field.split('_');
    let mut name = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }

    name
}

/// Decode failures stop before any field rule runs, so they are reported once
/// for the whole body.
fn decode_error(e: &serde_json::Error) -> FieldError {
    if e.is_syntax() || e.is_eof() {
        return FieldError::new("", "invalid_json", format!("Malformed JSON: {e}"));
    }

    let text = e.to_string();
    if text.starts_with("unknown field") {
        let key = text.split('`').nth(1).unwrap_or_default();
        return FieldError::new(
            "",
            "unrecognized_keys",
            format!("Unrecognized key(s) in object: '{key}'"),
        );
    }

    FieldError::new("", "invalid_type", text)
}
