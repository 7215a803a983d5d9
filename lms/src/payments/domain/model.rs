use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub message: String,
}

impl PaymentOutcome {
    pub fn paid(transaction_id: &str) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.to_string()),
            message: format!("Payment successful! Transaction ID: {}.", transaction_id),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            transaction_id: None,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RefundOutcome {
    pub success: bool,
    pub message: String,
}

impl RefundOutcome {
    pub fn refunded(detail: &str) -> Self {
        Self {
            success: true,
            message: format!("Refund successful: {}", detail),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
