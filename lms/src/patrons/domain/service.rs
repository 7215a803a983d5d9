use std::collections::BTreeSet;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::library::{LibraryError, LibraryResult};
use crate::fees::domain::calculator::FeePolicy;
use crate::patrons::{INVALID_PATRON_ID, is_valid_patron_id};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::{BorrowedBookDto, PatronStatusReport};
use crate::utils::date::days_overdue;

pub struct PatronServiceImpl {
    fee_policy: FeePolicy,
    catalog_service: Arc<dyn CatalogService>,
    checkout_service: Arc<dyn CheckoutService>,
}

impl PatronServiceImpl {
    pub fn new(fee_policy: &FeePolicy, catalog_service: Arc<dyn CatalogService>,
               checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            fee_policy: fee_policy.clone(),
            catalog_service,
            checkout_service,
        }
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    async fn status_report_on(&self, patron_id: &str, today: NaiveDate) -> LibraryResult<PatronStatusReport> {
        if !is_valid_patron_id(patron_id) {
            return Err(LibraryError::validation(INVALID_PATRON_ID, Some("400".to_string())));
        }
        let mut currently_borrowed = vec![];
        for checkout in self.checkout_service.list_active_borrows(patron_id).await? {
            let book = self.catalog_service.find_book_by_id(checkout.book_id.as_str()).await?;
            let days = days_overdue(today, checkout.due_at);
            currently_borrowed.push(BorrowedBookDto {
                book_id: book.book_id,
                title: book.title,
                author: book.author,
                due_at: checkout.due_at,
                days_overdue: days,
                fee_amount: self.fee_policy.compute_fee(days),
            });
        }

        let mut titles = BTreeSet::new();
        for checkout in self.checkout_service.list_history(patron_id).await? {
            let book = self.catalog_service.find_book_by_id(checkout.book_id.as_str()).await?;
            titles.insert(book.title);
        }

        let report = PatronStatusReport::new(patron_id, currently_borrowed, titles.into_iter().collect());
        debug!(patron_id, borrowed = report.num_borrowed_books, total = %report.total_late_fees, "patron status built");
        Ok(report)
    }
}
