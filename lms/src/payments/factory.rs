use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::fees::domain::FeeService;
use crate::gateway::events::EventPublisher;
use crate::gateway::payments::PaymentGateway;
use crate::payments::domain::PaymentService;
use crate::payments::domain::service::PaymentServiceImpl;

pub fn create_payment_service(config: &Configuration, catalog_service: Arc<dyn CatalogService>,
                              fee_service: Arc<dyn FeeService>,
                              payment_gateway: Arc<dyn PaymentGateway>,
                              events_publisher: Arc<dyn EventPublisher>) -> Arc<dyn PaymentService> {
    Arc::new(PaymentServiceImpl::new(config, catalog_service, fee_service, payment_gateway, events_publisher))
}
