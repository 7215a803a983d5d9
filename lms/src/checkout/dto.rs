use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::CheckoutStatus;
use crate::utils::date::serializer;


// CheckoutDto abstracts the book that is checked out or borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_id: String,
    pub version: i64,
    pub branch_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub checkout_status: CheckoutStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CheckoutDto {
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }
}

impl From<&CheckoutEntity> for CheckoutDto {
    fn from(other: &CheckoutEntity) -> CheckoutDto {
        CheckoutDto {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&CheckoutDto> for CheckoutEntity {
    fn from(other: &CheckoutDto) -> CheckoutEntity {
        CheckoutEntity {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
