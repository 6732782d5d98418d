// Ports the checkout coordinator depends on, without implementing them.
//
// Responsibilities
// - Describe payment and notification capabilities as traits.
// - Keep CheckoutService independent of any concrete payment method or channel.
//
// Boundaries
// - Concrete processors and notifiers live in adapters/.

use crate::modules::checkout::core::order::Order;

pub trait PaymentProcessor: Send + Sync {
    /// Label used in log lines.
    fn name(&self) -> &str;

    /// Charges the order. Returns `true` when the payment went through.
    fn process(&self, order: &Order) -> bool;
}

pub trait Notifier: Send + Sync {
    fn send(&self, order: &Order);
}
