use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::library::{LibraryError, LibraryResult};
use crate::fees::domain::calculator::FeePolicy;
use crate::fees::domain::FeeService;
use crate::fees::domain::model::{AssessmentStatus, FeeAssessment};
use crate::patrons::is_valid_patron_id;
use crate::utils::date::days_overdue;

pub struct FeeServiceImpl {
    fee_policy: FeePolicy,
    catalog_service: Arc<dyn CatalogService>,
    checkout_service: Arc<dyn CheckoutService>,
}

impl FeeServiceImpl {
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
impl FeeService for FeeServiceImpl {
    async fn assess_on(&self, patron_id: &str, book_id: &str, today: NaiveDate) -> LibraryResult<FeeAssessment> {
        if !is_valid_patron_id(patron_id) {
            return Ok(FeeAssessment::unassessed(AssessmentStatus::InvalidPatronId));
        }
        match self.catalog_service.find_book_by_id(book_id).await {
            Ok(_) => {}
            Err(LibraryError::NotFound { .. }) => {
                return Ok(FeeAssessment::unassessed(AssessmentStatus::BookNotFound));
            }
            Err(err) => return Err(err),
        }
        if self.checkout_service.list_active_borrows(patron_id).await?.is_empty() {
            return Ok(FeeAssessment::unassessed(AssessmentStatus::NotBorrowed));
        }
        let Some(checkout) = self.checkout_service.find_active_borrow(patron_id, book_id).await? else {
            return Ok(FeeAssessment::unassessed(AssessmentStatus::NotBorrowed));
        };
        let days = days_overdue(today, checkout.due_at);
        let assessment = FeeAssessment::new(self.fee_policy.compute_fee(days), days);
        debug!(patron_id, book_id, days_overdue = days, fee = %assessment.fee_amount, "late fee assessed");
        Ok(assessment)
    }
}
