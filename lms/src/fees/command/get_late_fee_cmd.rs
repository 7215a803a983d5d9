use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::fees::domain::FeeService;
use crate::fees::domain::model::FeeAssessment;

pub struct GetLateFeeCommand {
    fee_service: Arc<dyn FeeService>,
}

impl GetLateFeeCommand {
    pub fn new(fee_service: Arc<dyn FeeService>) -> Self {
        Self {
            fee_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetLateFeeCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl GetLateFeeCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetLateFeeCommandResponse {
    #[serde(flatten)]
    pub assessment: FeeAssessment,
}

#[async_trait]
impl Command<GetLateFeeCommandRequest, GetLateFeeCommandResponse> for GetLateFeeCommand {
    async fn execute(&self, req: GetLateFeeCommandRequest) -> Result<GetLateFeeCommandResponse, CommandError> {
        self.fee_service.assess(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(|assessment| GetLateFeeCommandResponse { assessment })
    }
}
