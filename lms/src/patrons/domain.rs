pub mod service;

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronStatusReport;
use crate::utils::date::today;

#[async_trait]
pub trait PatronService: Sync + Send {
    async fn status_report_on(&self, patron_id: &str, today: NaiveDate) -> LibraryResult<PatronStatusReport>;

    async fn status_report(&self, patron_id: &str) -> LibraryResult<PatronStatusReport> {
        self.status_report_on(patron_id, today()).await
    }
}
