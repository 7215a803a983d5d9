use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::utils::date::serializer;

// BookEntity abstracts a catalog title together with how many of its copies are on the shelf.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i64,
    pub available_copies: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, total_copies: i64) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies,
            available_copies: total_copies,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
