use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::PaymentProcessor;

#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferProcessor;

impl BankTransferProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for BankTransferProcessor {
    fn name(&self) -> &str {
        "bank_transfer"
    }

    fn process(&self, order: &Order) -> bool {
        tracing::info!(
            target: "checkout",
            order_id = %order.order_id,
            amount = order.total_price,
            "payment: processing bank transfer"
        );
        true
    }
}
