use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::Configuration;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;

pub fn create_patron_service(config: &Configuration, catalog_service: Arc<dyn CatalogService>,
                             checkout_service: Arc<dyn CheckoutService>) -> Arc<dyn PatronService> {
    Arc::new(PatronServiceImpl::new(&config.fee_policy, catalog_service, checkout_service))
}
