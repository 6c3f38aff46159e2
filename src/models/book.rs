//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full book model from database. The stored ISBN is always the normalized
/// form (digits/X only).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub isbn: Option<String>,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}

/// Book row joined with its author's name, for the list view
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookWithAuthor {
    pub id: i64,
    pub isbn: Option<String>,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
    pub author_name: String,
}

/// Raw book form submission; ISBN, year and author id arrive as text.
#[derive(Debug, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub publication_year: String,
    #[serde(default)]
    pub author_id: String,
}

/// Validated book data ready for persistence
#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: Option<String>,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}

/// Sort keys accepted by the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
}

impl SortKey {
    /// Parse a `sort_by` query value; unknown values fall back to storage order.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(SortKey::Title),
            "author" => Some(SortKey::Author),
            _ => None,
        }
    }
}

/// Book list query: optional title substring filter and sort key
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}
