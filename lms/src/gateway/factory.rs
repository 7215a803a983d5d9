use std::sync::Arc;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::payments::PaymentGateway;
use crate::gateway::payments::simulated::SimulatedPaymentGateway;

pub fn create_publisher() -> Arc<dyn EventPublisher> {
    Arc::new(LogPublisher::new())
}

pub fn create_payment_gateway() -> Arc<dyn PaymentGateway> {
    Arc::new(SimulatedPaymentGateway::new())
}
