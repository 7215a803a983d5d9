use std::sync::Arc;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::payments::domain::PaymentService;
use crate::payments::domain::model::RefundOutcome;

pub struct RefundLateFeeCommand {
    payment_service: Arc<dyn PaymentService>,
}

impl RefundLateFeeCommand {
    pub fn new(payment_service: Arc<dyn PaymentService>) -> Self {
        Self {
            payment_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RefundLateFeeCommandRequest {
    pub transaction_id: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct RefundLateFeeCommandResponse {
    #[serde(flatten)]
    pub outcome: RefundOutcome,
}

#[async_trait]
impl Command<RefundLateFeeCommandRequest, RefundLateFeeCommandResponse> for RefundLateFeeCommand {
    async fn execute(&self, req: RefundLateFeeCommandRequest) -> Result<RefundLateFeeCommandResponse, CommandError> {
        let outcome = self.payment_service.refund_late_fee(req.transaction_id.as_str(), req.amount).await;
        Ok(RefundLateFeeCommandResponse { outcome })
    }
}
