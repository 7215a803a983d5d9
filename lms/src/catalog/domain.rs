pub mod service;

use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SearchKind {
    Title,
    Author,
    Isbn,
}

impl SearchKind {
    // unknown kinds are not an error, they simply match nothing
    pub fn parse(s: &str) -> Option<SearchKind> {
        match s.trim().to_lowercase().as_str() {
            "title" => Some(SearchKind::Title),
            "author" => Some(SearchKind::Author),
            "isbn" => Some(SearchKind::Isbn),
            _ => None,
        }
    }
}

impl Display for SearchKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchKind::Title => write!(f, "title"),
            SearchKind::Author => write!(f, "author"),
            SearchKind::Isbn => write!(f, "isbn"),
        }
    }
}

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, total_copies: i64) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn search_books(&self, term: &str, kind: &str) -> LibraryResult<Vec<BookDto>>;
    async fn update_availability(&self, id: &str, delta: i64) -> LibraryResult<BookDto>;
}
