use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronStatusReport;

pub struct PatronStatusCommand {
    patron_service: Arc<dyn PatronService>,
}

impl PatronStatusCommand {
    pub fn new(patron_service: Arc<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PatronStatusCommandRequest {
    pub patron_id: String,
}

#[derive(Debug, Serialize)]
pub struct PatronStatusCommandResponse {
    pub report: PatronStatusReport,
}

#[async_trait]
impl Command<PatronStatusCommandRequest, PatronStatusCommandResponse> for PatronStatusCommand {
    async fn execute(&self, req: PatronStatusCommandRequest) -> Result<PatronStatusCommandResponse, CommandError> {
        self.patron_service.status_report(req.patron_id.as_str())
            .await.map_err(CommandError::from).map(|report| PatronStatusCommandResponse { report })
    }
}
