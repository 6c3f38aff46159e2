//! HTTP handlers for the Bookshelf web interface

pub mod health;
pub mod pages;
pub mod views;
