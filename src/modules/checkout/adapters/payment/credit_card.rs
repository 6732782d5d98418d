// Credit card payment adapter.
//
// No card network is contacted; every charge is accepted.

use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::PaymentProcessor;

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl CreditCardProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn name(&self) -> &str {
        "credit_card"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            target: "checkout",
            order_id = %order.order_id,
            amount = order.total_price,
            "payment: charging credit card"
        );
        true
    }
}
