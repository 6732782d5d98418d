// Email notification adapter.
//
// Purpose
// - Confirm a paid order to its customer.
//
// Boundaries
// - No mail is sent; the confirmation is written to the log.

use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::Notifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, order: &Order) {
        tracing::info!(
            target: "checkout",
            order_id = %order.order_id,
            "notify: sending confirmation email to {}",
            order.customer_name
        );
    }
}
