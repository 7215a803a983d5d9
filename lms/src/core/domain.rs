use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::fees::domain::calculator::FeePolicy;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub max_borrowed_books: usize,
    pub fee_policy: FeePolicy,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 14,
            max_borrowed_books: 5,
            fee_policy: FeePolicy::default(),
        }
    }

    /// Loads a configuration from a JSON file; fields missing from the file keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> LibraryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(json.as_str())
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.book_loan_days <= 0 {
            return Err(LibraryError::validation(
                format!("book_loan_days must be positive, got {}", self.book_loan_days).as_str(), None));
        }
        if self.max_borrowed_books == 0 {
            return Err(LibraryError::validation("max_borrowed_books must be positive", None));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}
