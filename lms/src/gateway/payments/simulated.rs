use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use crate::gateway::payments::{GatewayOutcome, PaymentGateway, PaymentReceipt, RefundReceipt, TRANSACTION_PREFIX};

const DEFAULT_PAYMENT_LIMIT: Decimal = dec!(1000.00);

// SimulatedPaymentGateway stands in for the card processor: it never touches real money
// and declines what a processor would decline.
#[derive(Debug)]
pub struct SimulatedPaymentGateway {
    payment_limit: Decimal,
}

impl SimulatedPaymentGateway {
    pub fn new() -> Self {
        Self {
            payment_limit: DEFAULT_PAYMENT_LIMIT,
        }
    }
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn process_payment(&self, patron_id: &str, amount: Decimal, description: &str) -> GatewayOutcome<PaymentReceipt> {
        if amount <= Decimal::ZERO {
            return GatewayOutcome::Declined("Invalid amount: must be positive".to_string());
        }
        if amount > self.payment_limit {
            return GatewayOutcome::Declined("Payment declined: amount exceeds limit".to_string());
        }
        if patron_id.len() != 6 {
            return GatewayOutcome::Declined("Invalid patron ID format".to_string());
        }
        let transaction_id = format!("{}{}_{}", TRANSACTION_PREFIX, patron_id, Utc::now().timestamp());
        info!(patron_id, %amount, description, transaction_id = transaction_id.as_str(), "simulated payment");
        GatewayOutcome::Accepted(PaymentReceipt {
            message: format!("Payment of ${:.2} processed successfully", amount),
            transaction_id,
        })
    }

    async fn refund_payment(&self, transaction_id: &str, amount: Decimal) -> GatewayOutcome<RefundReceipt> {
        if !transaction_id.starts_with(TRANSACTION_PREFIX) {
            return GatewayOutcome::Declined("Invalid transaction ID".to_string());
        }
        if amount <= Decimal::ZERO {
            return GatewayOutcome::Declined("Invalid refund amount".to_string());
        }
        let refund_id = format!("refund_{}_{}", transaction_id, Utc::now().timestamp());
        info!(transaction_id, %amount, refund_id = refund_id.as_str(), "simulated refund");
        GatewayOutcome::Accepted(RefundReceipt {
            message: format!("Refund of ${:.2} processed successfully. Refund ID: {}", amount, refund_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use crate::gateway::payments::{GatewayOutcome, PaymentGateway};
    use crate::gateway::payments::simulated::SimulatedPaymentGateway;

    #[tokio::test]
    async fn test_should_accept_payment() {
        let gateway = SimulatedPaymentGateway::new();
        match gateway.process_payment("123456", dec!(6.5), "Late fees for 'Emma'").await {
            GatewayOutcome::Accepted(receipt) => {
                assert!(receipt.transaction_id.starts_with("txn_123456_"));
                assert_eq!("Payment of $6.50 processed successfully", receipt.message.as_str());
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_decline_payment() {
        let gateway = SimulatedPaymentGateway::new();
        assert!(matches!(gateway.process_payment("123456", dec!(1001.0), "Late fees").await, GatewayOutcome::Declined(_)));
        assert!(matches!(gateway.process_payment("123456", dec!(0), "Late fees").await, GatewayOutcome::Declined(_)));
        assert!(matches!(gateway.process_payment("1234", dec!(1), "Late fees").await, GatewayOutcome::Declined(_)));
    }

    #[tokio::test]
    async fn test_should_refund() {
        let gateway = SimulatedPaymentGateway::new();
        match gateway.refund_payment("txn_123456_1", dec!(10.5)).await {
            GatewayOutcome::Accepted(receipt) => assert!(receipt.message.starts_with("Refund of $10.50 processed successfully")),
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert!(matches!(gateway.refund_payment("abc", dec!(10.5)).await, GatewayOutcome::Declined(_)));
        assert!(matches!(gateway.refund_payment("txn_123456_1", dec!(-1)).await, GatewayOutcome::Declined(_)));
    }
}
