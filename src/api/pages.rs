//! Page handlers for the library interface
//!
//! Validation and conflict errors are rendered inline on the submitted form;
//! anything unexpected is logged and shown as a generic message. Successful
//! writes redirect with a `notice` query parameter.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::AuthorForm,
        book::{BookForm, BookQuery, SortKey},
    },
    AppState,
};

use super::views;

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}

/// Turn a handler error into the message shown inline on a form
fn form_error_message(err: &AppError) -> String {
    match err {
        AppError::Validation(msg) | AppError::Conflict(msg) => msg.clone(),
        other => {
            tracing::error!("Unexpected error while handling form: {:?}", other);
            "An unexpected error occurred. Please try again.".to_string()
        }
    }
}

/// `GET /` - book list with optional search and sort
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> AppResult<Markup> {
    let query = BookQuery {
        search: params.search.clone().filter(|s| !s.trim().is_empty()),
        sort: params.sort_by.as_deref().and_then(SortKey::parse),
    };

    let books = state.services.library.list_books(&query).await?;

    Ok(views::home(
        &books,
        params.search.as_deref(),
        params.notice.as_deref(),
    ))
}

/// `GET /add_author` - author creation form
pub async fn add_author_form(Query(params): Query<NoticeParams>) -> Markup {
    views::author_form(None, params.notice.as_deref())
}

/// `POST /add_author` - create an author or re-render the form with an error
pub async fn add_author_submit(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> Response {
    match state.services.library.add_author(&form).await {
        Ok(_) => Redirect::to("/add_author?notice=Author+added+successfully").into_response(),
        Err(err) => views::author_form(Some(&form_error_message(&err)), None).into_response(),
    }
}

/// `GET /add_book` - book creation form
pub async fn add_book_form(
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
) -> AppResult<Markup> {
    let authors = state.services.library.list_authors().await?;
    Ok(views::book_form(&authors, None, params.notice.as_deref()))
}

/// `POST /add_book` - create a book or re-render the form with an error
pub async fn add_book_submit(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.library.add_book(&form).await {
        Ok(_) => Ok(Redirect::to("/add_book?notice=Book+added+successfully").into_response()),
        Err(err) => {
            let message = form_error_message(&err);
            let authors = state.services.library.list_authors().await?;
            Ok(views::book_form(&authors, Some(&message), None).into_response())
        }
    }
}

/// `POST /book/:id/delete` - delete a book and return to the list.
/// An unknown id renders the 404 error page.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    state.services.library.delete_book(id).await?;
    Ok(Redirect::to("/?notice=Book+deleted"))
}
