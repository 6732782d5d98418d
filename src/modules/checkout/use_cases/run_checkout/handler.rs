// Checkout coordinator.
//
// Responsibilities
// - Delegate the charge to the injected PaymentProcessor.
// - On success, mark the order paid and delegate the confirmation to the injected Notifier.
// - On failure, leave the order open and report false.

use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::{Notifier, PaymentProcessor};
use chrono::Utc;
use std::sync::Arc;

pub struct CheckoutService<TProcessor, TNotifier>
where
    TProcessor: PaymentProcessor + ?Sized,
    TNotifier: Notifier + ?Sized,
{
    payment_processor: Arc<TProcessor>,
    notifier: Arc<TNotifier>,
}

impl<TProcessor, TNotifier> CheckoutService<TProcessor, TNotifier>
where
    TProcessor: PaymentProcessor + ?Sized,
    TNotifier: Notifier + ?Sized,
{
    pub fn new(payment_processor: Arc<TProcessor>, notifier: Arc<TNotifier>) -> Self {
        Self {
            payment_processor,
            notifier,
        }
    }

    pub fn payment_method(&self) -> &str {
        self.payment_processor.name()
    }

    pub fn run_checkout(&self, order: &mut Order) -> bool {
        tracing::info!(
            target: "checkout",
            order_id = %order.order_id,
            method = self.payment_processor.name(),
            "starting checkout for {}, total: {}",
            order.customer_name,
            order.total_price
        );

        let order_id = order.order_id;
        let payable = match order.open_for_payment() {
            Ok(payable) => payable,
            Err(err) => {
                tracing::warn!(target: "checkout", "checkout skipped: {err}");
                return false;
            }
        };

        if !self.payment_processor.process(payable.order()) {
            tracing::error!(
                target: "checkout",
                order_id = %order_id,
                "payment failed, transaction cancelled"
            );
            return false;
        }

        payable.mark_paid(Utc::now().timestamp_millis());
        self.notifier.send(order);
        tracing::info!(
            target: "checkout",
            order_id = %order.order_id,
            "checkout succeeded, order status: {}",
            order.status
        );
        true
    }
}
