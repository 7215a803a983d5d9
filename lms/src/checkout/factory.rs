use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::checkout::repository::CheckoutRepository;
use crate::checkout::repository::memory_checkout_repository::MemoryCheckoutRepository;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub fn create_checkout_repository() -> Arc<dyn CheckoutRepository> {
    Arc::new(MemoryCheckoutRepository::new())
}

pub fn create_checkout_service(config: &Configuration, checkout_repo: Arc<dyn CheckoutRepository>,
                               catalog_svc: Arc<dyn CatalogService>,
                               publisher: Arc<dyn EventPublisher>) -> Arc<dyn CheckoutService> {
    Arc::new(CheckoutServiceImpl::new(config, checkout_repo, catalog_svc, publisher))
}
