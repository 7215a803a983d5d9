use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::payments::domain::PaymentService;
use crate::payments::domain::model::PaymentOutcome;

pub struct PayLateFeeCommand {
    payment_service: Arc<dyn PaymentService>,
}

impl PayLateFeeCommand {
    pub fn new(payment_service: Arc<dyn PaymentService>) -> Self {
        Self {
            payment_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PayLateFeeCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl PayLateFeeCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayLateFeeCommandResponse {
    #[serde(flatten)]
    pub outcome: PaymentOutcome,
}

#[async_trait]
impl Command<PayLateFeeCommandRequest, PayLateFeeCommandResponse> for PayLateFeeCommand {
    async fn execute(&self, req: PayLateFeeCommandRequest) -> Result<PayLateFeeCommandResponse, CommandError> {
        let outcome = self.payment_service.pay_late_fee(req.patron_id.as_str(), req.book_id.as_str()).await;
        Ok(PayLateFeeCommandResponse { outcome })
    }
}
