// Builder for Order values used across tests.

use crate::modules::checkout::core::order::{Order, OrderStatus};

pub const FIXED_PAID_AT: i64 = 1_700_000_000_000;

pub struct OrderBuilder {
    inner: Order,
}

#[allow(dead_code)]
impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            inner: Order::new("Andi", 500_000),
        }
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = v.into();
        self
    }

    pub fn total_price(mut self, v: u64) -> Self {
        self.inner.total_price = v;
        self
    }

    pub fn paid(mut self) -> Self {
        self.inner.status = OrderStatus::Paid;
        self.inner.paid_at = Some(FIXED_PAID_AT);
        self
    }

    pub fn build(self) -> Order {
        self.inner
    }
}
