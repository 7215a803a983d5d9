use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::fees::domain::FeeService;
use crate::fees::domain::service::FeeServiceImpl;

pub fn create_fee_service(config: &Configuration, catalog_service: Arc<dyn CatalogService>,
                          checkout_service: Arc<dyn CheckoutService>) -> Arc<dyn FeeService> {
    Arc::new(FeeServiceImpl::new(&config.fee_policy, catalog_service, checkout_service))
}
