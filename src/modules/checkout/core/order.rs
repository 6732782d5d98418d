// Order entity for the checkout flow.
//
// Purpose
// - Carry the customer, the amount due and the payment status of a single order.
//
// Responsibilities
// - Start every order as Open.
// - Allow the Open -> Paid transition exactly once and stamp when it happened.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order {order_id} is already paid")]
    AlreadyPaid { order_id: Uuid },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Paid => f.write_str("paid"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub order_id: Uuid,
    pub customer_name: String,
    /// Amount due in whole rupiah.
    pub total_price: u64,
    pub status: OrderStatus,
    pub paid_at: Option<i64>,
}

impl Order {
    pub fn new(customer_name: impl Into<String>, total_price: u64) -> Self {
        Self {
            order_id: Uuid::now_v7(),
            customer_name: customer_name.into(),
            total_price,
            status: OrderStatus::Open,
            paid_at: None,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Borrows the order for payment. Fails when it is already paid.
    pub fn open_for_payment(&mut self) -> Result<PayableOrder<'_>, OrderError> {
        if self.is_paid() {
            return Err(OrderError::AlreadyPaid {
                order_id: self.order_id,
            });
        }
        Ok(PayableOrder { order: self })
    }

    pub fn mark_paid(&mut self, paid_at: i64) -> Result<(), OrderError> {
        self.open_for_payment()?.mark_paid(paid_at);
        Ok(())
    }
}

/// An order known to be open. Completing the payment consumes it.
pub struct PayableOrder<'a> {
    order: &'a mut Order,
}

impl PayableOrder<'_> {
    pub fn order(&self) -> &Order {
        self.order
    }

    pub fn mark_paid(self, paid_at: i64) {
        self.order.status = OrderStatus::Paid;
        self.order.paid_at = Some(paid_at);
    }
}
