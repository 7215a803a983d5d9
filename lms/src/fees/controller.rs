use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::fees::command::get_late_fee_cmd::{GetLateFeeCommand, GetLateFeeCommandRequest};

pub async fn get_late_fee(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: GetLateFeeCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = GetLateFeeCommand::new(state.fee_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}
