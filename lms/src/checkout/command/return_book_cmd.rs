use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
    checkout_service: Arc<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            catalog_service,
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub checkout: CheckoutDto,
    pub message: String,
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let checkout = self.checkout_service.returned(req.patron_id.as_str(), req.book_id.as_str()).await?;
        let book = self.catalog_service.find_book_by_id(checkout.book_id.as_str()).await?;
        Ok(ReturnBookCommandResponse {
            checkout,
            message: format!(r#"Successfully returned "{}""#, book.title),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::library::CheckoutStatus;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let state = AppState::new(Configuration::new("test"));
        let book = state.catalog_service.add_book("Beloved", "Toni Morrison", "9781400033416", 1)
            .await.expect("should add book");
        let checkout_cmd = CheckoutBookCommand::new(state.catalog_service.clone(), state.checkout_service.clone());
        let return_cmd = ReturnBookCommand::new(state.catalog_service.clone(), state.checkout_service.clone());

        let res = return_cmd.execute(ReturnBookCommandRequest::new("123456", book.book_id.as_str())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));

        let _ = checkout_cmd.execute(CheckoutBookCommandRequest::new("123456", book.book_id.as_str()))
            .await.expect("should checkout book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new("123456", book.book_id.as_str()))
            .await.expect("should return book");
        assert_eq!(CheckoutStatus::Returned, res.checkout.checkout_status);
        assert!(res.checkout.returned_at.is_some());
        assert_eq!(r#"Successfully returned "Beloved""#, res.message);

        let loaded = state.catalog_service.find_book_by_id(book.book_id.as_str()).await.expect("should find book");
        assert_eq!(1, loaded.available_copies);
    }
}
