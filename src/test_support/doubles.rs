// Test doubles for the checkout and registration ports.
//
// Each double counts or records how it was called so tests can assert
// on delegation, not only on results.

use crate::modules::checkout::core::order::Order;
use crate::modules::checkout::core::ports::{Notifier, PaymentProcessor};
use crate::modules::registration::core::ports::{RuleViolation, ValidationRule};
use crate::modules::registration::core::registration_data::RegistrationData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct StubProcessor {
    accepts: bool,
    calls: CallCounter,
}

impl StubProcessor {
    pub fn accepting() -> Self {
        Self {
            accepts: true,
            calls: CallCounter::default(),
        }
    }

    pub fn declining() -> Self {
        Self {
            accepts: false,
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PaymentProcessor for StubProcessor {
    fn name(&self) -> &str {
        "stub"
    }

    fn process(&self, _order: &Order) -> bool {
        self.calls.hit();
        self.accepts
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Uuid>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Uuid> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, order: &Order) {
        self.sent.lock().unwrap().push(order.order_id);
    }
}

pub struct CountingRule {
    name: String,
    passes: bool,
    calls: CallCounter,
}

impl CountingRule {
    pub fn new(name: impl Into<String>, passes: bool) -> Self {
        Self {
            name: name.into(),
            passes,
            calls: CallCounter::default(),
        }
    }

    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ValidationRule for CountingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, _data: &RegistrationData) -> Result<(), RuleViolation> {
        self.calls.hit();
        if self.passes {
            Ok(())
        } else {
            Err(RuleViolation::PrerequisitesNotMet)
        }
    }
}
