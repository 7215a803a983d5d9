use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub async fn add_book(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}

pub async fn find_book_by_id(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: GetBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = GetBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}

pub async fn search_books(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req: SearchBooksCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = SearchBooksCommand::new(state.catalog_service.clone()).execute(req).await?;
    serde_json::to_value(res).map_err(json_to_server_error)
}
