use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand {
    catalog_service: Arc<dyn CatalogService>,
    checkout_service: Arc<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            catalog_service,
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    pub patron_id: String,
    pub book_id: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub checkout: CheckoutDto,
    pub message: String,
}

impl CheckoutBookCommandResponse {
    pub fn new(checkout: CheckoutDto, title: &str) -> Self {
        let message = format!(r#"Successfully borrowed "{}". Due date: {}."#, title, checkout.due_at.format("%Y-%m-%d"));
        Self {
            checkout,
            message,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        let checkout = self.checkout_service.borrow(req.patron_id.as_str(), req.book_id.as_str()).await?;
        let book = self.catalog_service.find_book_by_id(checkout.book_id.as_str()).await?;
        Ok(CheckoutBookCommandResponse::new(checkout, book.title.as_str()))
    }
}
