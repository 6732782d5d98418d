// End to end checkout flow through the public crate API.
//
// - Real processors and notifier for the happy path.
// - Local doubles to observe delegation on the failure path.

use rstest::rstest;
use solid_demos::modules::checkout::adapters::notification::email::EmailNotifier;
use solid_demos::modules::checkout::adapters::payment::bank_transfer::BankTransferProcessor;
use solid_demos::modules::checkout::adapters::payment::credit_card::CreditCardProcessor;
use solid_demos::modules::checkout::adapters::payment::qris::QrisProcessor;
use solid_demos::modules::checkout::core::order::{Order, OrderStatus};
use solid_demos::modules::checkout::core::ports::{Notifier, PaymentProcessor};
use solid_demos::modules::checkout::use_cases::run_checkout::handler::CheckoutService;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct DecliningProcessor;

impl PaymentProcessor for DecliningProcessor {
    fn name(&self) -> &str {
        "declining"
    }

    fn process(&self, _order: &Order) -> bool {
        false
    }
}

#[derive(Default)]
struct CountingNotifier {
    sent: AtomicUsize,
}

impl Notifier for CountingNotifier {
    fn send(&self, _order: &Order) {
        self.sent.fetch_add(1, Ordering::SeqCst);
    }
}

#[rstest]
#[case(Arc::new(CreditCardProcessor::new()) as Arc<dyn PaymentProcessor>)]
#[case(Arc::new(QrisProcessor::new()) as Arc<dyn PaymentProcessor>)]
#[case(Arc::new(BankTransferProcessor::new()) as Arc<dyn PaymentProcessor>)]
fn every_bundled_processor_should_complete_the_checkout(#[case] processor: Arc<dyn PaymentProcessor>) {
    let notifier = Arc::new(CountingNotifier::default());
    let service = CheckoutService::new(processor, notifier.clone());
    let mut order = Order::new("Andi", 500_000);

    assert!(service.run_checkout(&mut order));
    assert_eq!(order.status, OrderStatus::Paid);
    assert!(order.paid_at.is_some());
    assert_eq!(notifier.sent.load(Ordering::SeqCst), 1);
}

#[rstest]
fn a_declined_payment_should_leave_the_order_open() {
    let notifier = Arc::new(CountingNotifier::default());
    let service = CheckoutService::new(Arc::new(DecliningProcessor), notifier.clone());
    let mut order = Order::new("Andi", 500_000);

    assert!(!service.run_checkout(&mut order));
    assert_eq!(order.status, OrderStatus::Open);
    assert_eq!(order.status.to_string(), "open");
    assert_eq!(notifier.sent.load(Ordering::SeqCst), 0);
}

#[rstest]
fn a_second_checkout_of_the_same_order_should_be_refused() {
    let notifier = Arc::new(CountingNotifier::default());
    let service = CheckoutService::new(Arc::new(CreditCardProcessor::new()), notifier.clone());
    let mut order = Order::new("Budi", 100_000);

    assert!(service.run_checkout(&mut order));
    let paid_at = order.paid_at;
    assert!(!service.run_checkout(&mut order));
    assert_eq!(order.paid_at, paid_at);
    assert_eq!(notifier.sent.load(Ordering::SeqCst), 1);
}

#[rstest]
fn the_email_notifier_should_plug_into_any_service() {
    let email = Arc::new(EmailNotifier::new());
    let card = CheckoutService::new(Arc::new(CreditCardProcessor::new()), email.clone());
    let qris = CheckoutService::new(Arc::new(QrisProcessor::new()), email);
    let mut andi = Order::new("Andi", 500_000);
    let mut budi = Order::new("Budi", 100_000);

    assert!(card.run_checkout(&mut andi));
    assert!(qris.run_checkout(&mut budi));
    assert!(andi.is_paid() && budi.is_paid());
}
