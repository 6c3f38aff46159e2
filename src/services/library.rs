//! Library management service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorForm, NewAuthor},
        book::{Book, BookForm, BookQuery, BookWithAuthor, NewBook},
    },
    repository::Repository,
    validation::{format_isbn, validate_date, validate_isbn, validate_year},
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with optional title filter and sort key
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookWithAuthor>> {
        self.repository.books.search(query).await
    }

    /// All authors, for the book form dropdown
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list_all().await
    }

    /// Validate an author form and persist it.
    /// The death date must not precede the birth date and neither date may
    /// lie in the future.
    pub async fn add_author(&self, form: &AuthorForm) -> AppResult<Author> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "The author's name must not be empty".to_string(),
            ));
        }

        let birth_date = validate_date(&form.birth_date)?;
        let date_of_death = validate_date(&form.date_of_death)?;

        if let (Some(birth), Some(death)) = (birth_date, date_of_death) {
            if death < birth {
                return Err(AppError::Validation(
                    "The date of death cannot be before the birth date".to_string(),
                ));
            }
        }

        let today = Utc::now().date_naive();
        if birth_date.is_some_and(|d| d > today) {
            return Err(AppError::Validation(
                "The birth date cannot be in the future".to_string(),
            ));
        }
        if date_of_death.is_some_and(|d| d > today) {
            return Err(AppError::Validation(
                "The date of death cannot be in the future".to_string(),
            ));
        }

        let author = self
            .repository
            .authors
            .create(&NewAuthor {
                name: name.to_string(),
                birth_date,
                date_of_death,
            })
            .await?;

        tracing::info!("Added author id={} name={:?}", author.id, author.name);
        Ok(author)
    }

    /// Validate a book form and persist it.
    /// The ISBN is stored normalized; a duplicate normalized ISBN is rejected
    /// regardless of how the input was hyphenated.
    pub async fn add_book(&self, form: &BookForm) -> AppResult<Book> {
        let isbn = validate_isbn(&form.isbn)?;
        let publication_year = validate_year(&form.publication_year)?;

        let title = form.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation(
                "The title must not be empty".to_string(),
            ));
        }

        let author_id: i64 = form.author_id.trim().parse().map_err(|_| {
            AppError::Validation("A valid author must be selected".to_string())
        })?;
        if !self.repository.authors.exists(author_id).await? {
            return Err(AppError::Validation(
                "The selected author does not exist".to_string(),
            ));
        }

        if let Some(ref isbn) = isbn {
            if self.repository.books.isbn_exists(isbn).await? {
                return Err(AppError::Conflict(format!(
                    "A book with ISBN {} already exists",
                    format_isbn(isbn)
                )));
            }
        }

        let book = self
            .repository
            .books
            .create(&NewBook {
                isbn,
                title: title.to_string(),
                publication_year,
                author_id,
            })
            .await?;

        tracing::info!("Added book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Delete a book by id, returning the deleted title
    pub async fn delete_book(&self, id: i64) -> AppResult<String> {
        let title = self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={} title={:?}", id, title);
        Ok(title)
    }
}
