//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Raw author form submission; both dates arrive as free-form text.
#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    pub name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// Validated author data ready for persistence
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
