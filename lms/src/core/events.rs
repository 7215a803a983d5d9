use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType names the state transitions of a book and its late fee
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    BookAdded,
    BookBorrowed,
    BookReturned,
    LateFeePaid,
    LateFeeRefunded,
}

impl Display for DomainEventType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DomainEventType::BookAdded => write!(f, "book_added"),
            DomainEventType::BookBorrowed => write!(f, "book_borrowed"),
            DomainEventType::BookReturned => write!(f, "book_returned"),
            DomainEventType::LateFeePaid => write!(f, "late_fee_paid"),
            DomainEventType::LateFeeRefunded => write!(f, "late_fee_refunded"),
        }
    }
}

// DomainEvent abstracts domain event for data changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub kind: DomainEventType,
    pub key: String,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn new<T: Serialize>(kind: DomainEventType, key: &str, metadata: HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            kind,
            key: key.to_string(),
            metadata,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn name(&self) -> String {
        self.kind.to_string()
    }
}
