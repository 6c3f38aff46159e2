//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, BookWithAuthor, NewBook, SortKey},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List books joined with their author, with an optional case-insensitive
    /// title filter and sort key. No filter and no sort key yields storage order.
    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<BookWithAuthor>> {
        let mut sql = String::from(
            "SELECT b.id, b.isbn, b.title, b.publication_year, b.author_id, a.name AS author_name \
             FROM books b JOIN authors a ON a.id = b.author_id",
        );

        if query.search.is_some() {
            sql.push_str(" WHERE b.title LIKE ?1");
        }

        match query.sort {
            Some(SortKey::Title) => sql.push_str(" ORDER BY b.title COLLATE NOCASE ASC"),
            Some(SortKey::Author) => sql.push_str(" ORDER BY a.name COLLATE NOCASE ASC"),
            None => {}
        }

        let mut books = sqlx::query_as::<_, BookWithAuthor>(&sql);
        if let Some(ref term) = query.search {
            books = books.bind(format!("%{}%", term));
        }

        Ok(books.fetch_all(&self.pool).await?)
    }

    /// Check if a normalized ISBN is already present
    pub async fn isbn_exists(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = ?1)")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Insert a new book and return the stored row
    pub async fn create(&self, book: &NewBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, publication_year, author_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, isbn, title, publication_year, author_id
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.publication_year)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a book by id, returning its title
    pub async fn delete(&self, id: i64) -> AppResult<String> {
        let title: Option<String> =
            sqlx::query_scalar("DELETE FROM books WHERE id = ?1 RETURNING title")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        title.ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }
}
