// Demo scenarios run by the binary.
//
// Scenario 1 pays a card order, scenario 2 pays a QRIS order through the
// same notifier, scenario 3 validates a course registration.

use crate::modules::checkout::adapters::notification::email::EmailNotifier;
use crate::modules::checkout::adapters::payment::credit_card::CreditCardProcessor;
use crate::modules::checkout::adapters::payment::qris::QrisProcessor;
use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::{Notifier, PaymentProcessor};
use crate::modules::checkout::use_cases::run_checkout::handler::CheckoutService;
use crate::modules::registration::rules::prerequisite::PrerequisiteRule;
use crate::modules::registration::rules::schedule_conflict::ScheduleConflictRule;
use crate::modules::registration::rules::sks_limit::SksLimitRule;
use crate::modules::registration::use_cases::validate_registration::handler::RegistrationService;
use crate::shell::config::{DemoConfig, DemoCustomer};
use std::sync::Arc;

#[derive(Debug)]
pub struct CheckoutOutcome {
    pub method: String,
    pub succeeded: bool,
    pub order: Order,
}

#[derive(Debug)]
pub struct DemoReport {
    pub checkouts: Vec<CheckoutOutcome>,
    pub registration_passed: bool,
}

pub fn run(config: &DemoConfig) -> DemoReport {
    let notifier = Arc::new(EmailNotifier::new());

    tracing::info!(target: "checkout", "--- scenario 1: credit card ---");
    let card = checkout(
        Arc::new(CreditCardProcessor::new()),
        notifier.clone(),
        &config.card_customer,
    );

    tracing::info!(target: "checkout", "--- scenario 2: QRIS ---");
    let qris = checkout(Arc::new(QrisProcessor::new()), notifier, &config.qris_customer);

    tracing::info!(target: "registration", "--- scenario 3: course registration ---");
    let registration_passed = registration_service(config).validate(&config.student);

    DemoReport {
        checkouts: vec![card, qris],
        registration_passed,
    }
}

pub fn log_summary(report: &DemoReport) {
    let paid = report.checkouts.iter().filter(|c| c.succeeded).count();
    tracing::info!(
        target: "demo",
        paid,
        checkouts = report.checkouts.len(),
        registration_passed = report.registration_passed,
        "demo finished"
    );
}

pub fn registration_service(config: &DemoConfig) -> RegistrationService {
    RegistrationService::default()
        .with_rule(SksLimitRule::new(config.max_sks))
        .with_rule(PrerequisiteRule::new())
        .with_rule(ScheduleConflictRule::new())
}

fn checkout<TProcessor, TNotifier>(
    processor: Arc<TProcessor>,
    notifier: Arc<TNotifier>,
    customer: &DemoCustomer,
) -> CheckoutOutcome
where
    TProcessor: PaymentProcessor,
    TNotifier: Notifier,
{
    let service = CheckoutService::new(processor, notifier);
    let mut order = Order::new(customer.name.clone(), customer.total_price);
    let succeeded = service.run_checkout(&mut order);
    CheckoutOutcome {
        method: service.payment_method().to_string(),
        succeeded,
        order,
    }
}
