use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub term: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "title".to_string()
}

impl SearchBooksCommandRequest {
    pub fn new(term: &str, kind: &str) -> Self {
        Self {
            term: term.to_string(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(req.term.as_str(), req.kind.as_str())
            .await.map_err(CommandError::from).map(|books| SearchBooksCommandResponse { books })
    }
}
