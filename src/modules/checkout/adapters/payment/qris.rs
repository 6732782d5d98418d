// QRIS payment adapter. Added next to the card processor without touching
// CheckoutService.

use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::PaymentProcessor;

#[derive(Debug, Default, Clone, Copy)]
pub struct QrisProcessor;

impl QrisProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for QrisProcessor {
    fn name(&self) -> &str {
        "qris"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            target: "checkout",
            order_id = %order.order_id,
            amount = order.total_price,
            "payment: processing QRIS"
        );
        true
    }
}

#[cfg(test)]
mod qris_processor_tests {
    use super::*;
    use crate::test_support::fixtures::order::OrderBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_the_payment() {
        let order = OrderBuilder::new().customer_name("Budi").total_price(100_000).build();
        assert!(QrisProcessor::new().process(&order));
        assert_eq!(QrisProcessor::new().name(), "qris");
    }
}
