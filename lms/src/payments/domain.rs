pub mod model;
pub mod service;

use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::payments::domain::model::{PaymentOutcome, RefundOutcome};

// Every failure is reported in the outcome, the gateway is called at most once per request.
#[async_trait]
pub trait PaymentService: Sync + Send {
    async fn pay_late_fee(&self, patron_id: &str, book_id: &str) -> PaymentOutcome;
    async fn refund_late_fee(&self, transaction_id: &str, amount: Decimal) -> RefundOutcome;
}
