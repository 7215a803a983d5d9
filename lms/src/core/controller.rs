use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::catalog;
use crate::checkout;
use crate::fees;
use crate::patrons;
use crate::payments;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory::{create_checkout_repository, create_checkout_service};
use crate::checkout::repository::CheckoutRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::fees::domain::FeeService;
use crate::fees::factory::create_fee_service;
use crate::gateway::factory::{create_payment_gateway, create_publisher};
use crate::gateway::payments::PaymentGateway;
use crate::patrons::domain::PatronService;
use crate::patrons::factory::create_patron_service;
use crate::payments::domain::PaymentService;
use crate::payments::factory::create_payment_service;

// AppState wires every service of one library branch over a shared in-memory ledger.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog_service: Arc<dyn CatalogService>,
    pub checkout_service: Arc<dyn CheckoutService>,
    pub fee_service: Arc<dyn FeeService>,
    pub patron_service: Arc<dyn PatronService>,
    pub payment_service: Arc<dyn PaymentService>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState::with_gateway(config, create_payment_gateway())
    }

    pub fn with_gateway(config: Configuration, payment_gateway: Arc<dyn PaymentGateway>) -> AppState {
        AppState::with_parts(config, create_book_repository(), create_checkout_repository(), payment_gateway)
    }

    /// Wires services over caller-owned repositories so a ledger can be seeded before the desk opens.
    pub fn with_parts(
        config: Configuration,
        book_repository: Arc<dyn BookRepository>,
        checkout_repository: Arc<dyn CheckoutRepository>,
        payment_gateway: Arc<dyn PaymentGateway>) -> AppState {
        let publisher = create_publisher();
        let catalog_service = create_catalog_service(&config, book_repository, publisher.clone());
        let checkout_service = create_checkout_service(
            &config, checkout_repository, catalog_service.clone(), publisher.clone());
        let fee_service = create_fee_service(&config, catalog_service.clone(), checkout_service.clone());
        let patron_service = create_patron_service(&config, catalog_service.clone(), checkout_service.clone());
        let payment_service = create_payment_service(
            &config, catalog_service.clone(), fee_service.clone(), payment_gateway, publisher);
        AppState {
            config,
            catalog_service,
            checkout_service,
            fee_service,
            patron_service,
            payment_service,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServerError {
    pub status: u16,
    pub message: String,
}

impl ServerError {
    pub fn new(status: u16, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::new(400, format!("{}", err).as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => 500,
            CommandError::DuplicateKey { .. } => 409,
            CommandError::NotFound { .. } => 404,
            CommandError::Runtime { .. } => 500,
            CommandError::Serialization { .. } => 400,
            CommandError::Validation { .. } => 400,
        };
        ServerError::new(status, err.message())
    }
}

// routes one request of the form {"action": "...", ...} to its controller
pub async fn dispatch(state: &AppState, request: Value) -> Result<Value, ServerError> {
    let action = request.get("action").and_then(Value::as_str)
        .ok_or_else(|| ServerError::new(400, "missing action"))?.to_string();
    match action.as_str() {
        "add_book" => catalog::controller::add_book(state, request).await,
        "get_book" => catalog::controller::find_book_by_id(state, request).await,
        "search_books" => catalog::controller::search_books(state, request).await,
        "borrow_book" => checkout::controller::checkout_book(state, request).await,
        "return_book" => checkout::controller::return_book(state, request).await,
        "late_fee" => fees::controller::get_late_fee(state, request).await,
        "pay_late_fee" => payments::controller::pay_late_fee(state, request).await,
        "refund_late_fee" => payments::controller::refund_late_fee(state, request).await,
        "patron_status" => patrons::controller::patron_status(state, request).await,
        other => Err(ServerError::new(404, format!("unknown action {}", other).as_str())),
    }
}

// handles one line of input, errors are folded into the response
pub async fn handle_line(state: &AppState, line: &str) -> Value {
    let res = match serde_json::from_str::<Value>(line) {
        Ok(request) => dispatch(state, request).await,
        Err(err) => Err(json_to_server_error(err)),
    };
    match res {
        Ok(value) => value,
        Err(err) => {
            warn!(status = err.status, message = err.message.as_str(), "request failed");
            json!({"error": err})
        }
    }
}
