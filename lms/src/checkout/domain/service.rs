use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use async_trait::async_trait;
use tracing::{error, info};
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::dto::CheckoutDto;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult};
use crate::books::domain::Book;
use crate::gateway::events::EventPublisher;
use crate::patrons::{INVALID_PATRON_ID, is_valid_patron_id};

pub const NOT_BORROWED: &str = "no book found borrowed with patron ID";
pub const NOT_AVAILABLE: &str = "This book is currently not available.";

pub struct CheckoutServiceImpl {
    branch_id: String,
    book_loan_days: i64,
    max_borrowed_books: usize,
    checkout_repository: Arc<dyn CheckoutRepository>,
    catalog_service: Arc<dyn CatalogService>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub fn new(config: &Configuration, checkout_repository: Arc<dyn CheckoutRepository>,
               catalog_service: Arc<dyn CatalogService>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_loan_days: config.book_loan_days,
            max_borrowed_books: config.max_borrowed_books,
            checkout_repository,
            catalog_service,
            events_publisher,
        }
    }

    fn validate_patron(patron_id: &str) -> LibraryResult<()> {
        if is_valid_patron_id(patron_id) {
            Ok(())
        } else {
            Err(LibraryError::validation(INVALID_PATRON_ID, Some("400".to_string())))
        }
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<CheckoutDto> {
        Self::validate_patron(patron_id)?;
        let book = self.catalog_service.find_book_by_id(book_id).await?;
        if !book.is_available() {
            return Err(LibraryError::validation(NOT_AVAILABLE, Some("400".to_string())));
        }
        let active = self.checkout_repository.list_active(patron_id).await?;
        if active.iter().any(|c| c.book_id == book_id) {
            return Err(LibraryError::validation("This book is already borrowed by the patron.", Some("400".to_string())));
        }
        if active.len() >= self.max_borrowed_books {
            return Err(LibraryError::validation(format!("You have reached the maximum borrowing limit of {} books.",
                                                        self.max_borrowed_books).as_str(), Some("400".to_string())));
        }
        // the copy is taken under the book lock before the loan is recorded
        match self.catalog_service.update_availability(book_id, -1).await {
            Ok(_) => {}
            Err(LibraryError::Validation { .. }) => {
                return Err(LibraryError::validation(NOT_AVAILABLE, Some("400".to_string())));
            }
            Err(err) => return Err(err),
        }
        let entity = CheckoutEntity::new(self.branch_id.as_str(), book_id, patron_id, self.book_loan_days);
        if let Err(err) = self.checkout_repository.create(&entity).await {
            if let Err(restore_err) = self.catalog_service.update_availability(book_id, 1).await {
                error!(patron_id, book_id, error = %restore_err, "failed to put back copy of unrecorded loan");
            }
            return Err(err);
        }
        let checkout = CheckoutDto::from(&entity);
        info!(patron_id, book_id, title = book.title(), due_at = %checkout.due_at, "book borrowed");
        self.events_publisher.publish(&DomainEvent::new(
            DomainEventType::BookBorrowed, checkout.checkout_id.as_str(),
            HashMap::from([("patron_id".to_string(), patron_id.to_string())]), &checkout)?).await?;
        Ok(checkout)
    }

    async fn returned(&self, patron_id: &str, book_id: &str) -> LibraryResult<CheckoutDto> {
        Self::validate_patron(patron_id)?;
        let _ = self.catalog_service.find_book_by_id(book_id).await?;
        let mut existing = self.checkout_repository.find_active(patron_id, book_id).await?
            .ok_or_else(|| LibraryError::not_found(NOT_BORROWED))?;
        existing.checkout_status = CheckoutStatus::Returned;
        existing.returned_at = Some(Utc::now().naive_utc());
        self.checkout_repository.update(&existing).await?;
        self.catalog_service.update_availability(book_id, 1).await?;
        existing.version += 1;
        let checkout = CheckoutDto::from(&existing);
        info!(patron_id, book_id, status = %checkout.checkout_status, "book returned");
        self.events_publisher.publish(&DomainEvent::new(
            DomainEventType::BookReturned, checkout.checkout_id.as_str(),
            HashMap::from([("patron_id".to_string(), patron_id.to_string())]), &checkout)?).await?;
        Ok(checkout)
    }

    async fn find_active_borrow(&self, patron_id: &str, book_id: &str) -> LibraryResult<Option<CheckoutDto>> {
        let res = self.checkout_repository.find_active(patron_id, book_id).await?;
        Ok(res.as_ref().map(CheckoutDto::from))
    }

    async fn list_active_borrows(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutDto>> {
        let res = self.checkout_repository.list_active(patron_id).await?;
        Ok(res.iter().map(CheckoutDto::from).collect())
    }

    async fn list_history(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutDto>> {
        let res = self.checkout_repository.list_by_patron(patron_id).await?;
        Ok(res.iter().map(CheckoutDto::from).collect())
    }
}
