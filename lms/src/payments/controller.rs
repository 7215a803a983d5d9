use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::payments::command::pay_late_fee_cmd::{PayLateFeeCommand, PayLateFeeCommandRequest};
use crate::payments::command::refund_late_fee_cmd::{RefundLateFeeCommand, RefundLateFeeCommandRequest};

pub async fn pay_late_fee(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: PayLateFeeCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = PayLateFeeCommand::new(state.payment_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}

pub async fn refund_late_fee(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: RefundLateFeeCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = RefundLateFeeCommand::new(state.payment_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}
