use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, SearchKind};
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub const BOOK_NOT_FOUND: &str = "Book not found.";
const MAX_TITLE_LEN: usize = 200;
const MAX_AUTHOR_LEN: usize = 100;
const ISBN_LEN: usize = 13;

pub struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }

    fn validate(title: &str, author: &str, isbn: &str, total_copies: i64) -> LibraryResult<()> {
        let invalid = |message: &str| Err(LibraryError::validation(message, Some("400".to_string())));
        if title.is_empty() {
            return invalid("Title is required.");
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return invalid("Title must be less than 200 characters.");
        }
        if author.is_empty() {
            return invalid("Author is required.");
        }
        if author.chars().count() > MAX_AUTHOR_LEN {
            return invalid("Author must be less than 100 characters.");
        }
        if isbn.chars().count() != ISBN_LEN {
            return invalid("ISBN must be exactly 13 digits.");
        }
        if !isbn.chars().all(|c| c.is_ascii_digit()) {
            return invalid("ISBN must contain only digits.");
        }
        if total_copies <= 0 {
            return invalid("Total copies must be a positive integer.");
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, isbn: &str, total_copies: i64) -> LibraryResult<BookDto> {
        let title = title.trim();
        let author = author.trim();
        Self::validate(title, author, isbn, total_copies)?;
        if self.book_repository.find_by_isbn(isbn).await?.is_some() {
            return Err(LibraryError::duplicate_key("A book with this ISBN already exists."));
        }
        let book = BookEntity::new(title, author, isbn, total_copies);
        self.book_repository.create(&book).await?;
        let dto = BookDto::from(&book);
        info!(book_id = dto.book_id.as_str(), isbn, total_copies, "book added to catalog");
        self.events_publisher.publish(&DomainEvent::new(
            DomainEventType::BookAdded, dto.book_id.as_str(), HashMap::new(), &dto)?).await?;
        Ok(dto)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        match self.book_repository.get(id).await {
            Ok(book) => Ok(BookDto::from(&book)),
            Err(LibraryError::NotFound { .. }) => Err(LibraryError::not_found(BOOK_NOT_FOUND)),
            Err(err) => Err(err),
        }
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let res = self.book_repository.find_by_isbn(isbn).await?;
        Ok(res.as_ref().map(BookDto::from))
    }

    async fn search_books(&self, term: &str, kind: &str) -> LibraryResult<Vec<BookDto>> {
        let term = term.trim().to_lowercase();
        let kind = match SearchKind::parse(kind) {
            Some(kind) if !term.is_empty() => kind,
            _ => return Ok(vec![]),
        };
        let books = self.book_repository.find_all().await?;
        let mut res: Vec<BookDto> = books.iter().filter(|b| {
            let field = match kind {
                SearchKind::Title => &b.title,
                SearchKind::Author => &b.author,
                SearchKind::Isbn => &b.isbn,
            };
            field.to_lowercase().contains(term.as_str())
        }).map(BookDto::from).collect();
        res.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(res)
    }

    async fn update_availability(&self, id: &str, delta: i64) -> LibraryResult<BookDto> {
        self.book_repository.update_availability(id, delta).await.map(|b| BookDto::from(&b))
    }
}
