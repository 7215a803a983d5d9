use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i64,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, total_copies: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = format!(r#"Book "{}" has been successfully added to the catalog."#, book.title);
        Self {
            book,
            message,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.isbn.as_str(), req.total_copies)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let state = AppState::new(Configuration::new("test"));
        let cmd = AddBookCommand::new(state.catalog_service.clone());

        let res = cmd.execute(AddBookCommandRequest::new("  Beloved ", "Toni Morrison", "9781400033416", 3))
            .await.expect("should add book");
        assert_eq!("Beloved", res.book.title);
        assert_eq!(3, res.book.available_copies);
        assert_eq!(r#"Book "Beloved" has been successfully added to the catalog."#, res.message);

        let res = cmd.execute(AddBookCommandRequest::new("Beloved", "Toni Morrison", "9781400033416", 1)).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }
}
