use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// In-memory book table keyed by `book_id`.
#[derive(Debug, Default, Clone)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<HashMap<String, BookEntity>>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.contains_key(&entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", entity.book_id).as_str()));
        }
        books.insert(entity.book_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let existing = books.get_mut(&entity.book_id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", entity.book_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::conflict(
                format!("book {} version {} is stale", entity.book_id, entity.version).as_str()));
        }
        *existing = entity.clone();
        existing.version = entity.version + 1;
        existing.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", id).as_str()))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.values().find(|b| b.isbn == isbn).cloned())
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn update_availability(&self, book_id: &str, delta: i64) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let book = books.get_mut(book_id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", book_id).as_str()))?;
        let available = book.available_copies + delta;
        if available < 0 || available > book.total_copies {
            return Err(LibraryError::validation(
                format!("book {} cannot have {} of {} copies available",
                        book_id, available, book.total_copies).as_str(), Some("400".to_string())));
        }
        book.available_copies = available;
        book.version += 1;
        book.updated_at = Utc::now().naive_utc();
        Ok(book.clone())
    }
}
