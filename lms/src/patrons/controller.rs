use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::patrons::command::patron_status_cmd::{PatronStatusCommand, PatronStatusCommandRequest};

pub async fn patron_status(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: PatronStatusCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = PatronStatusCommand::new(state.patron_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}
