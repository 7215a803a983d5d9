use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use crate::utils::date::serializer;

// BorrowedBookDto is one active borrow in a patron status report
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowedBookDto {
    pub book_id: String,
    pub title: String,
    pub author: String,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub days_overdue: i64,
    pub fee_amount: Decimal,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronStatusReport {
    pub patron_id: String,
    pub currently_borrowed: Vec<BorrowedBookDto>,
    pub total_late_fees: Decimal,
    pub num_borrowed_books: usize,
    pub borrowing_history: Vec<String>,
}

impl PatronStatusReport {
    pub fn new(patron_id: &str, currently_borrowed: Vec<BorrowedBookDto>, borrowing_history: Vec<String>) -> Self {
        let total_late_fees = currently_borrowed.iter().fold(dec!(0.00), |total, b| total + b.fee_amount);
        Self {
            patron_id: patron_id.to_string(),
            num_borrowed_books: currently_borrowed.len(),
            currently_borrowed,
            total_late_fees,
            borrowing_history,
        }
    }
}
