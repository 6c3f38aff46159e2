//! Server-rendered HTML views

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::{
    models::{author::Author, book::BookWithAuthor},
    validation::format_isbn,
};

const STYLE: &str = "\
    body { font-family: sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }\
    nav { margin-bottom: 1.5rem; }\
    table { border-collapse: collapse; width: 100%; }\
    th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }\
    label { display: block; margin: 0.6rem 0; }\
    .flash.success { color: #216e39; }\
    .flash.error { color: #b00020; }";

fn layout(page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (page_title) " - Bookshelf" }
                style { (STYLE) }
            }
            body {
                nav {
                    a href="/" { "Books" }
                    " | "
                    a href="/add_author" { "Add author" }
                    " | "
                    a href="/add_book" { "Add book" }
                }
                main { (content) }
            }
        }
    }
}

fn flash(notice: Option<&str>, error: Option<&str>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            p.flash.success { (notice) }
        }
        @if let Some(error) = error {
            p.flash.error { (error) }
        }
    }
}

/// Book list page with search box, sort links and per-row delete buttons
pub fn home(books: &[BookWithAuthor], search: Option<&str>, notice: Option<&str>) -> Markup {
    layout(
        "Books",
        html! {
            h1 { "Books" }
            (flash(notice, None))
            form method="get" action="/" {
                input type="text" name="search" placeholder="Search by title" value=[search];
                button type="submit" { "Search" }
            }
            p {
                "Sort by: "
                a href="/?sort_by=title" { "title" }
                " | "
                a href="/?sort_by=author" { "author" }
            }
            @if books.is_empty() {
                p { "No books found." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Author" }
                            th { "ISBN" }
                            th { "Year" }
                            th {}
                        }
                    }
                    tbody {
                        @for book in books {
                            tr {
                                td { (book.title) }
                                td { (book.author_name) }
                                td {
                                    @if let Some(ref isbn) = book.isbn {
                                        (format_isbn(isbn))
                                    }
                                }
                                td {
                                    @if let Some(year) = book.publication_year {
                                        (year)
                                    }
                                }
                                td {
                                    form method="post" action={ "/book/" (book.id) "/delete" } {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Author creation form
pub fn author_form(error: Option<&str>, notice: Option<&str>) -> Markup {
    layout(
        "Add author",
        html! {
            h1 { "Add author" }
            (flash(notice, error))
            form method="post" action="/add_author" {
                label {
                    "Name"
                    input type="text" name="name" required;
                }
                label {
                    "Birth date"
                    input type="text" name="birth_date" placeholder="YYYY-MM-DD, DD.MM.YYYY or YYYY";
                }
                label {
                    "Date of death"
                    input type="text" name="date_of_death" placeholder="YYYY-MM-DD, DD.MM.YYYY or YYYY";
                }
                button type="submit" { "Add author" }
            }
        },
    )
}

/// Book creation form with an author dropdown
pub fn book_form(authors: &[Author], error: Option<&str>, notice: Option<&str>) -> Markup {
    layout(
        "Add book",
        html! {
            h1 { "Add book" }
            (flash(notice, error))
            @if authors.is_empty() {
                p {
                    "No authors yet. "
                    a href="/add_author" { "Add an author" }
                    " first."
                }
            } @else {
                form method="post" action="/add_book" {
                    label {
                        "Title"
                        input type="text" name="title" required;
                    }
                    label {
                        "ISBN"
                        input type="text" name="isbn" placeholder="e.g. 978-3-16-148410-0";
                    }
                    label {
                        "Publication year"
                        input type="text" name="publication_year";
                    }
                    label {
                        "Author"
                        select name="author_id" required {
                            @for author in authors {
                                option value=(author.id) { (author.name) }
                            }
                        }
                    }
                    button type="submit" { "Add book" }
                }
            }
        },
    )
}

/// Minimal error page used by `AppError::into_response`
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        "Error",
        html! {
            h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p { (message) }
            p { a href="/" { "Back to books" } }
        },
    )
}
