pub mod memory_checkout_repository;

use async_trait::async_trait;
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait CheckoutRepository: Repository<CheckoutEntity> {
    // the borrow record of this book the patron has not returned yet
    async fn find_active(&self, patron_id: &str, book_id: &str) -> LibraryResult<Option<CheckoutEntity>>;

    async fn list_active(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutEntity>>;

    // every borrow record of the patron, returned ones included, oldest first
    async fn list_by_patron(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutEntity>>;
}
