//! Authors repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::author::{Author, NewAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Insert a new author and return the stored row
    pub async fn create(&self, author: &NewAuthor) -> AppResult<Author> {
        let created = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, birth_date, date_of_death)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, birth_date, date_of_death
            "#,
        )
        .bind(&author.name)
        .bind(author.birth_date)
        .bind(author.date_of_death)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// All authors ordered by name, for the book form dropdown
    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, birth_date, date_of_death FROM authors ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Check if an author id exists
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
