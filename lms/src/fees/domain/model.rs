use std::fmt;
use std::fmt::{Display, Formatter};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum AssessmentStatus {
    #[serde(rename = "Invalid patron ID")]
    InvalidPatronId,
    #[serde(rename = "Book not found.")]
    BookNotFound,
    #[serde(rename = "no book found borrowed with patron ID")]
    NotBorrowed,
    #[serde(rename = "Overdue")]
    Overdue,
    #[serde(rename = "Not overdue")]
    NotOverdue,
}

impl AssessmentStatus {
    // true when a borrow record was found and the fee was computed from it
    pub fn is_assessed(&self) -> bool {
        matches!(self, AssessmentStatus::Overdue | AssessmentStatus::NotOverdue)
    }
}

impl Display for AssessmentStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AssessmentStatus::InvalidPatronId => write!(f, "Invalid patron ID"),
            AssessmentStatus::BookNotFound => write!(f, "Book not found."),
            AssessmentStatus::NotBorrowed => write!(f, "no book found borrowed with patron ID"),
            AssessmentStatus::Overdue => write!(f, "Overdue"),
            AssessmentStatus::NotOverdue => write!(f, "Not overdue"),
        }
    }
}

// FeeAssessment is the late fee state of one borrowed book, derived on every query.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FeeAssessment {
    pub fee_amount: Decimal,
    pub days_overdue: i64,
    pub status: AssessmentStatus,
}

impl FeeAssessment {
    pub fn new(fee_amount: Decimal, days_overdue: i64) -> Self {
        let status = if days_overdue > 0 { AssessmentStatus::Overdue } else { AssessmentStatus::NotOverdue };
        Self {
            fee_amount,
            days_overdue,
            status,
        }
    }

    // an assessment that owes nothing because the request could not be matched to a borrow
    pub fn unassessed(status: AssessmentStatus) -> Self {
        Self {
            fee_amount: dec!(0.00),
            days_overdue: 0,
            status,
        }
    }
}
