//! Database models and request types

pub mod author;
pub mod book;
