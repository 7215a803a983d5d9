use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let state = AppState::new(Configuration::new("test"));
        let add_cmd = AddBookCommand::new(state.catalog_service.clone());
        let get_cmd = GetBookCommand::new(state.catalog_service.clone());

        let res = add_cmd.execute(AddBookCommandRequest::new("Beloved", "Toni Morrison", "9781400033416", 1))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.book_id.as_str())).await.expect("should get book");
        assert_eq!(res.book, loaded.book);

        let missing = get_cmd.execute(GetBookCommandRequest::new("missing")).await;
        assert!(matches!(missing, Err(CommandError::NotFound { ref message }) if message == "Book not found."));
    }
}
