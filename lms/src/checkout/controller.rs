use serde_json::Value;
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub async fn checkout_book(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: CheckoutBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = CheckoutBookCommand::new(state.catalog_service.clone(), state.checkout_service.clone())
        .execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}

pub async fn return_book(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = ReturnBookCommand::new(state.catalog_service.clone(), state.checkout_service.clone())
        .execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}
