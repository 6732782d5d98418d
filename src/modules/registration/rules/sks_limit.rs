// Caps the total semester credits (SKS) a student may register for.

use crate::modules::registration::core::ports::{RuleViolation, ValidationRule};
use crate::modules::registration::core::registration_data::RegistrationData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SksLimitRule {
    max_sks: u32,
}

impl SksLimitRule {
    pub fn new(max_sks: u32) -> Self {
        Self { max_sks }
    }

}

impl ValidationRule for SksLimitRule {
    fn name(&self) -> &str {
        "sks_limit"
    }

    fn check(&self, data: &RegistrationData) -> Result<(), RuleViolation> {
        if data.total_sks > i64::from(self.max_sks) {
            return Err(RuleViolation::SksLimitExceeded {
                total: data.total_sks,
                max: self.max_sks,
            });
        }
        Ok(())
    }
}
