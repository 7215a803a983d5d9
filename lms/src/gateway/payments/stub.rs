use std::sync::Mutex;
use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::gateway::payments::{GatewayOutcome, PaymentGateway, PaymentReceipt, RefundReceipt};

#[derive(Debug, PartialEq, Clone)]
pub struct PaymentCall {
    pub patron_id: String,
    pub amount: Decimal,
    pub description: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct RefundCall {
    pub transaction_id: String,
    pub amount: Decimal,
}

// Scripted gateway that records every call it receives.
#[derive(Debug)]
pub struct RecordingGateway {
    payment_outcome: GatewayOutcome<PaymentReceipt>,
    refund_outcome: GatewayOutcome<RefundReceipt>,
    payments: Mutex<Vec<PaymentCall>>,
    refunds: Mutex<Vec<RefundCall>>,
}

impl RecordingGateway {
    pub fn new(payment_outcome: GatewayOutcome<PaymentReceipt>, refund_outcome: GatewayOutcome<RefundReceipt>) -> Self {
        Self {
            payment_outcome,
            refund_outcome,
            payments: Mutex::new(vec![]),
            refunds: Mutex::new(vec![]),
        }
    }

    pub fn accepting(transaction_id: &str, message: &str) -> Self {
        Self::new(
            GatewayOutcome::Accepted(PaymentReceipt { transaction_id: transaction_id.to_string(), message: message.to_string() }),
            GatewayOutcome::Accepted(RefundReceipt { message: message.to_string() }))
    }

    pub fn declining(message: &str) -> Self {
        Self::new(GatewayOutcome::Declined(message.to_string()), GatewayOutcome::Declined(message.to_string()))
    }

    pub fn faulting(message: &str) -> Self {
        Self::new(GatewayOutcome::Fault(message.to_string()), GatewayOutcome::Fault(message.to_string()))
    }

    pub fn payment_calls(&self) -> Vec<PaymentCall> {
        self.payments.lock().expect("payments lock").clone()
    }

    pub fn refund_calls(&self) -> Vec<RefundCall> {
        self.refunds.lock().expect("refunds lock").clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> GatewayOutcome<PaymentReceipt> {
        self.payments.lock().expect("payments lock").push(PaymentCall {
            patron_id: patron_id.to_string(),
            amount,
            description: description.to_string(),
        });
        self.payment_outcome.clone()
    }

    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> GatewayOutcome<RefundReceipt> {
        self.refunds.lock().expect("refunds lock").push(RefundCall {
            transaction_id: transaction_id.to_string(),
            amount,
        });
        self.refund_outcome.clone()
    }
}
