use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
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

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, total_copies: i64) -> BookDto {
        BookDto {
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

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            total_copies: other.total_copies,
            available_copies: other.available_copies,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            total_copies: other.total_copies,
            available_copies: other.available_copies,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let mut book = BookDto::new("The Hobbit", "J.R.R. Tolkien", "9780547928227", 1);
        assert_eq!("The Hobbit", book.title());
        assert!(book.is_available());
        book.available_copies = 0;
        assert!(!book.is_available());
    }

    #[tokio::test]
    async fn test_should_convert_entity() {
        let entity = BookEntity::new("Dune", "Frank Herbert", "9780441172719", 2);
        let dto = BookDto::from(&entity);
        assert_eq!(entity, BookEntity::from(&dto));
    }
}
