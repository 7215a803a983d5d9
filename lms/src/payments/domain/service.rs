use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult};
use crate::fees::domain::FeeService;
use crate::gateway::events::EventPublisher;
use crate::gateway::payments::{GatewayOutcome, PaymentGateway, TRANSACTION_PREFIX};
use crate::catalog::domain::service::BOOK_NOT_FOUND;
use crate::patrons::{INVALID_PATRON_ID, is_valid_patron_id};
use crate::payments::domain::PaymentService;
use crate::payments::domain::model::{PaymentOutcome, RefundOutcome};

pub const FEE_UNAVAILABLE: &str = "Unable to calculate late fees.";
pub const NO_FEE_DUE: &str = "No late fees to pay for this book.";
pub const PAYMENT_ERROR: &str = "Payment processing error. Please try again later.";
pub const INVALID_TRANSACTION_ID: &str = "Invalid transaction ID.";
pub const REFUND_ERROR: &str = "Refund processing error. Please try again later.";

pub struct PaymentServiceImpl {
    max_refund: Decimal,
    catalog_service: Arc<dyn CatalogService>,
    fee_service: Arc<dyn FeeService>,
    payment_gateway: Arc<dyn PaymentGateway>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl PaymentServiceImpl {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>,
               fee_service: Arc<dyn FeeService>,
               payment_gateway: Arc<dyn PaymentGateway>,
               events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            max_refund: config.fee_policy.max_late_fee,
            catalog_service,
            fee_service,
            payment_gateway,
            events_publisher,
        }
    }

    fn invalid_refund_amount(&self) -> String {
        format!("Refund amount must be greater than $0.00 and at most ${:.2}.", self.max_refund)
    }

    // a lost event never changes what already happened at the gateway
    async fn publish(&self, kind: DomainEventType, key: &str, metadata: HashMap<String, String>) {
        let res: LibraryResult<()> = async {
            let event = DomainEvent::new(kind, key, metadata.clone(), &metadata)?;
            self.events_publisher.publish(&event).await
        }.await;
        if let Err(err) = res {
            warn!(event = %kind, key, error = %err, "failed to publish event");
        }
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    async fn pay_late_fee(&self, patron_id: &str, book_id: &str) -> PaymentOutcome {
        if !is_valid_patron_id(patron_id) {
            return PaymentOutcome::failed(INVALID_PATRON_ID);
        }
        let book = match self.catalog_service.find_book_by_id(book_id).await {
            Ok(book) => book,
            Err(LibraryError::NotFound { .. }) => return PaymentOutcome::failed(BOOK_NOT_FOUND),
            Err(err) => {
                error!(patron_id, book_id, error = %err, "book lookup failed");
                return PaymentOutcome::failed(FEE_UNAVAILABLE);
            }
        };
        let assessment = match self.fee_service.assess(patron_id, book_id).await {
            Ok(assessment) => assessment,
            Err(err) => {
                error!(patron_id, book_id, error = %err, "late fee assessment failed");
                return PaymentOutcome::failed(FEE_UNAVAILABLE);
            }
        };
        if assessment.fee_amount <= Decimal::ZERO {
            return PaymentOutcome::failed(NO_FEE_DUE);
        }

        let description = format!("Late fees for '{}'", book.title);
        match self.payment_gateway.process_payment(patron_id, assessment.fee_amount, description.as_str()).await {
            GatewayOutcome::Accepted(receipt) => {
                info!(patron_id, book_id, amount = %assessment.fee_amount,
                    transaction_id = receipt.transaction_id.as_str(), "late fee paid");
                self.publish(DomainEventType::LateFeePaid, receipt.transaction_id.as_str(), HashMap::from([
                    ("patron_id".to_string(), patron_id.to_string()),
                    ("book_id".to_string(), book_id.to_string()),
                    ("amount".to_string(), assessment.fee_amount.to_string()),
                ])).await;
                PaymentOutcome::paid(receipt.transaction_id.as_str())
            }
            GatewayOutcome::Declined(detail) => {
                warn!(patron_id, book_id, amount = %assessment.fee_amount, detail = detail.as_str(), "payment declined");
                PaymentOutcome::failed(format!("Payment failed: {}", detail).as_str())
            }
            GatewayOutcome::Fault(detail) => {
                error!(patron_id, book_id, amount = %assessment.fee_amount, detail = detail.as_str(), "payment gateway fault");
                PaymentOutcome::failed(PAYMENT_ERROR)
            }
        }
    }

    async fn refund_late_fee(&self, transaction_id: &str, amount: Decimal) -> RefundOutcome {
        if !transaction_id.starts_with(TRANSACTION_PREFIX) {
            return RefundOutcome::failed(INVALID_TRANSACTION_ID);
        }
        if amount <= Decimal::ZERO || amount > self.max_refund {
            return RefundOutcome::failed(self.invalid_refund_amount().as_str());
        }

        match self.payment_gateway.refund_payment(transaction_id, amount).await {
            GatewayOutcome::Accepted(receipt) => {
                info!(transaction_id, %amount, "late fee refunded");
                self.publish(DomainEventType::LateFeeRefunded, transaction_id, HashMap::from([
                    ("amount".to_string(), amount.to_string()),
                ])).await;
                RefundOutcome::refunded(receipt.message.as_str())
            }
            GatewayOutcome::Declined(detail) => {
                warn!(transaction_id, %amount, detail = detail.as_str(), "refund declined");
                RefundOutcome::failed(format!("Refund failed: {}", detail).as_str())
            }
            GatewayOutcome::Fault(detail) => {
                error!(transaction_id, %amount, detail = detail.as_str(), "refund gateway fault");
                RefundOutcome::failed(REFUND_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate, Utc};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::checkout::factory::{create_checkout_repository, create_checkout_service};
    use crate::checkout::repository::CheckoutRepository;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::{LibraryError, LibraryResult};
    use crate::fees::domain::FeeService;
    use crate::fees::domain::model::FeeAssessment;
    use crate::fees::factory::create_fee_service;
    use crate::gateway::events::memory::MemoryPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::payments::stub::{PaymentCall, RecordingGateway, RefundCall};
    use crate::payments::domain::PaymentService;
    use crate::payments::domain::service::PaymentServiceImpl;

    fn ledger_down() -> LibraryError {
        LibraryError::unavailable("ledger is down", None, true)
    }

    // a catalog whose storage cannot be reached
    struct UnreachableCatalog;

    #[async_trait]
    impl CatalogService for UnreachableCatalog {
        async fn add_book(&self, _title: &str, _author: &str, _isbn: &str, _total_copies: i64) -> LibraryResult<BookDto> {
            Err(ledger_down())
        }

        async fn find_book_by_id(&self, _id: &str) -> LibraryResult<BookDto> {
            Err(ledger_down())
        }

        async fn find_book_by_isbn(&self, _isbn: &str) -> LibraryResult<Option<BookDto>> {
            Err(ledger_down())
        }

        async fn search_books(&self, _term: &str, _kind: &str) -> LibraryResult<Vec<BookDto>> {
            Err(ledger_down())
        }

        async fn update_availability(&self, _id: &str, _delta: i64) -> LibraryResult<BookDto> {
            Err(ledger_down())
        }
    }

    // a fee service whose borrow records cannot be read
    struct UnreachableFees;

    #[async_trait]
    impl FeeService for UnreachableFees {
        async fn assess_on(&self, _patron_id: &str, _book_id: &str, _today: NaiveDate) -> LibraryResult<FeeAssessment> {
            Err(ledger_down())
        }
    }

    struct Fixture {
        catalog_svc: Arc<dyn CatalogService>,
        checkout_svc: Arc<dyn CheckoutService>,
        checkout_repo: Arc<dyn CheckoutRepository>,
        gateway: Arc<RecordingGateway>,
        publisher: Arc<MemoryPublisher>,
        payment_svc: PaymentServiceImpl,
    }

    fn build_fixture(gateway: RecordingGateway, publisher: MemoryPublisher) -> Fixture {
        let config = Configuration::new("test");
        let gateway = Arc::new(gateway);
        let publisher = Arc::new(publisher);
        let ledger_events = create_publisher();
        let checkout_repo = create_checkout_repository();
        let catalog_svc = create_catalog_service(&config, create_book_repository(), ledger_events.clone());
        let checkout_svc = create_checkout_service(&config, checkout_repo.clone(), catalog_svc.clone(), ledger_events);
        let fee_svc = create_fee_service(&config, catalog_svc.clone(), checkout_svc.clone());
        let payment_svc = PaymentServiceImpl::new(&config, catalog_svc.clone(), fee_svc, gateway.clone(), publisher.clone());
        Fixture { catalog_svc, checkout_svc, checkout_repo, gateway, publisher, payment_svc }
    }

    async fn add_book(f: &Fixture) -> BookDto {
        f.catalog_svc.add_book("Middlemarch", "George Eliot", "9780141439549", 2).await.expect("should add book")
    }

    // borrow a book whose due date passed `days` days ago
    async fn borrow_overdue(f: &Fixture, patron_id: &str, book_id: &str, days: i64) {
        let mut entity = CheckoutEntity::new("test", book_id, patron_id, 14);
        entity.checkout_at = Utc::now().naive_utc() - Duration::days(14 + days);
        entity.due_at = Utc::now().naive_utc() - Duration::days(days);
        f.checkout_repo.create(&entity).await.expect("should create checkout");
    }

    #[tokio::test]
    async fn test_should_not_call_gateway_for_invalid_patron() {
        let f = build_fixture(RecordingGateway::accepting("txn_1", "ok"), MemoryPublisher::default());
        let book = add_book(&f).await;
        for patron in ["12345", "abcdef", "1234567"] {
            let res = f.payment_svc.pay_late_fee(patron, book.book_id.as_str()).await;
            assert!(!res.success);
            assert_eq!("Invalid patron ID. Must be exactly 6 digits.", res.message);
            assert_eq!(None, res.transaction_id);
        }
        assert!(f.gateway.payment_calls().is_empty());
    }

    #[tokio::test]
    async fn test_should_not_call_gateway_for_unknown_book() {
        let f = build_fixture(RecordingGateway::accepting("txn_1", "ok"), MemoryPublisher::default());
        let res = f.payment_svc.pay_late_fee("123456", "no-such-book").await;
        assert!(!res.success);
        assert_eq!("Book not found.", res.message);
        assert!(f.gateway.payment_calls().is_empty());
    }

    #[tokio::test]
    async fn test_should_not_call_gateway_without_fee() {
        let f = build_fixture(RecordingGateway::accepting("txn_1", "ok"), MemoryPublisher::default());
        let book = add_book(&f).await;

        let res = f.payment_svc.pay_late_fee("123456", book.book_id.as_str()).await;
        assert_eq!("No late fees to pay for this book.", res.message);

        let _ = f.checkout_svc.borrow("123456", book.book_id.as_str()).await.expect("should borrow");
        let res = f.payment_svc.pay_late_fee("123456", book.book_id.as_str()).await;
        assert!(!res.success);
        assert_eq!("No late fees to pay for this book.", res.message);
        assert!(f.gateway.payment_calls().is_empty());
    }

    #[tokio::test]
    async fn test_should_pay_late_fee() {
        let f = build_fixture(RecordingGateway::accepting("txn_777777_", "Payment processed"), MemoryPublisher::default());
        let book = add_book(&f).await;
        borrow_overdue(&f, "777777", book.book_id.as_str(), 6).await;

        let res = f.payment_svc.pay_late_fee("777777", book.book_id.as_str()).await;
        assert!(res.success);
        assert_eq!(Some("txn_777777_".to_string()), res.transaction_id);
        assert_eq!("Payment successful! Transaction ID: txn_777777_.", res.message);
        assert_eq!(vec![PaymentCall {
            patron_id: "777777".to_string(),
            amount: dec!(3.00),
            description: "Late fees for 'Middlemarch'".to_string(),
        }], f.gateway.payment_calls());
        assert!(f.publisher.kinds().contains(&DomainEventType::LateFeePaid));
    }

    #[tokio::test]
    async fn test_should_report_declined_payment() {
        let f = build_fixture(RecordingGateway::declining("card expired"), MemoryPublisher::default());
        let book = add_book(&f).await;
        borrow_overdue(&f, "777777", book.book_id.as_str(), 10).await;

        let res = f.payment_svc.pay_late_fee("777777", book.book_id.as_str()).await;
        assert!(!res.success);
        assert_eq!("Payment failed: card expired", res.message);
        assert_eq!(None, res.transaction_id);
        assert_eq!(dec!(6.50), f.gateway.payment_calls()[0].amount);
        assert!(!f.publisher.kinds().contains(&DomainEventType::LateFeePaid));
    }

    #[tokio::test]
    async fn test_should_hide_gateway_fault() {
        let f = build_fixture(RecordingGateway::faulting("Network error"), MemoryPublisher::default());
        let book = add_book(&f).await;
        borrow_overdue(&f, "777777", book.book_id.as_str(), 3).await;

        let res = f.payment_svc.pay_late_fee("777777", book.book_id.as_str()).await;
        assert!(!res.success);
        assert_eq!("Payment processing error. Please try again later.", res.message);
        assert_eq!(None, res.transaction_id);
        assert_eq!(1, f.gateway.payment_calls().len());
    }

    #[tokio::test]
    async fn test_should_keep_payment_when_publish_fails() {
        let f = build_fixture(RecordingGateway::accepting("txn_777777_1", "ok"), MemoryPublisher::failing());
        let book = add_book(&f).await;
        borrow_overdue(&f, "777777", book.book_id.as_str(), 3).await;

        let res = f.payment_svc.pay_late_fee("777777", book.book_id.as_str()).await;
        assert!(res.success);
        assert_eq!(Some("txn_777777_1".to_string()), res.transaction_id);
        assert!(f.publisher.kinds().is_empty());
    }

    #[rstest]
    #[case("ABC", dec!(10.5), "Invalid transaction ID.")]
    #[case("", dec!(10.5), "Invalid transaction ID.")]
    #[case("txn_777777_123", dec!(0), "Refund amount must be greater than $0.00 and at most $15.00.")]
    #[case("txn_777777_123", dec!(-0.50), "Refund amount must be greater than $0.00 and at most $15.00.")]
    #[case("txn_777777_123", dec!(15.01), "Refund amount must be greater than $0.00 and at most $15.00.")]
    #[tokio::test]
    async fn test_should_not_call_gateway_for_invalid_refund(#[case] txn: &str, #[case] amount: Decimal, #[case] message: &str) {
        let f = build_fixture(RecordingGateway::accepting("txn_1", "ok"), MemoryPublisher::default());
        let res = f.payment_svc.refund_late_fee(txn, amount).await;
        assert!(!res.success);
        assert_eq!(message, res.message);
        assert!(f.gateway.refund_calls().is_empty());
    }

    #[rstest]
    #[case(RecordingGateway::accepting("txn_1", "Refund of $10.50 processed"), true, "Refund successful: Refund of $10.50 processed")]
    #[case(RecordingGateway::declining("already refunded"), false, "Refund failed: already refunded")]
    #[case(RecordingGateway::faulting("timeout"), false, "Refund processing error. Please try again later.")]
    #[tokio::test]
    async fn test_should_refund_once(#[case] gateway: RecordingGateway, #[case] success: bool, #[case] message: &str) {
        let f = build_fixture(gateway, MemoryPublisher::default());
        let res = f.payment_svc.refund_late_fee("txn_777777_123", dec!(10.5)).await;
        assert_eq!(success, res.success);
        assert_eq!(message, res.message);
        assert_eq!(vec![RefundCall { transaction_id: "txn_777777_123".to_string(), amount: dec!(10.5) }],
                   f.gateway.refund_calls());
        assert_eq!(success, f.publisher.kinds().contains(&DomainEventType::LateFeeRefunded));
    }

    #[tokio::test]
    async fn test_should_refund_max_fee() {
        let f = build_fixture(RecordingGateway::accepting("txn_1", "ok"), MemoryPublisher::default());
        let res = f.payment_svc.refund_late_fee("txn_777777_123", dec!(15.00)).await;
        assert!(res.success);
    }

    #[tokio::test]
    async fn test_should_not_call_gateway_when_catalog_is_down() {
        let config = Configuration::new("test");
        let gateway = Arc::new(RecordingGateway::accepting("txn_1", "ok"));
        let catalog_svc: Arc<dyn CatalogService> = Arc::new(UnreachableCatalog);
        let checkout_svc = create_checkout_service(&config, create_checkout_repository(), catalog_svc.clone(), create_publisher());
        let fee_svc = create_fee_service(&config, catalog_svc.clone(), checkout_svc);
        let payment_svc = PaymentServiceImpl::new(&config, catalog_svc, fee_svc, gateway.clone(), create_publisher());

        let res = payment_svc.pay_late_fee("777777", "any-book").await;
        assert!(!res.success);
        assert_eq!("Unable to calculate late fees.", res.message);
        assert_eq!(None, res.transaction_id);
        assert!(gateway.payment_calls().is_empty());
    }

    #[tokio::test]
    async fn test_should_not_call_gateway_when_assessment_fails() {
        let config = Configuration::new("test");
        let f = build_fixture(RecordingGateway::accepting("txn_1", "ok"), MemoryPublisher::default());
        let book = add_book(&f).await;
        borrow_overdue(&f, "777777", book.book_id.as_str(), 5).await;
        let payment_svc = PaymentServiceImpl::new(&config, f.catalog_svc.clone(), Arc::new(UnreachableFees),
                                                  f.gateway.clone(), f.publisher.clone());

        let res = payment_svc.pay_late_fee("777777", book.book_id.as_str()).await;
        assert!(!res.success);
        assert_eq!("Unable to calculate late fees.", res.message);
        assert!(f.gateway.payment_calls().is_empty());
        assert!(f.publisher.kinds().is_empty());
    }
}
