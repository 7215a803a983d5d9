pub mod calculator;
pub mod model;
pub mod service;

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::library::LibraryResult;
use crate::fees::domain::model::FeeAssessment;
use crate::utils::date::today;

#[async_trait]
pub trait FeeService: Sync + Send {
    // Err only when the ledger cannot be read, every other outcome is in the assessment status
    async fn assess_on(&self, patron_id: &str, book_id: &str, today: NaiveDate) -> LibraryResult<FeeAssessment>;

    async fn assess(&self, patron_id: &str, book_id: &str) -> LibraryResult<FeeAssessment> {
        self.assess_on(patron_id, book_id, today()).await
    }
}
