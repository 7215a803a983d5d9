pub mod simulated;
#[cfg(test)]
pub mod stub;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// prefix the gateway puts on every transaction id it issues
pub const TRANSACTION_PREFIX: &str = "txn_";

/// What a payment processor made of a request. `Declined` is a business decision
/// carrying the processor's own explanation; `Fault` means the call itself failed
/// (network, timeout, processor outage) and nothing is known about the money.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum GatewayOutcome<T> {
    Accepted(T),
    Declined(String),
    Fault(String),
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub message: String,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RefundReceipt {
    pub message: String,
}

#[async_trait]
pub trait PaymentGateway: Sync + Send {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> GatewayOutcome<PaymentReceipt>;
    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> GatewayOutcome<RefundReceipt>;
}
