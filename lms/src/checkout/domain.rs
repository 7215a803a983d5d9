use async_trait::async_trait;
use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;

pub mod model;
pub mod service;

#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<CheckoutDto>;
    async fn returned(&self, patron_id: &str, book_id: &str) -> LibraryResult<CheckoutDto>;
    async fn find_active_borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<Option<CheckoutDto>>;
    async fn list_active_borrows(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutDto>>;
    async fn list_history(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutDto>>;
}
