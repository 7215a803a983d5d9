pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>>;

    // adds delta to available copies, keeping them within [0, total_copies]
    async fn update_availability(&self, book_id: &str, delta: i64) -> LibraryResult<BookEntity>;
}
