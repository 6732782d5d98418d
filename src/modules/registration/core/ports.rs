// Validation rule port for the registration flow.
//
// Responsibilities
// - Define the single capability every registration rule provides.
// - Log the outcome of each rule in one place so rules only describe their check.

use crate::modules::registration::core::registration_data::RegistrationData;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("total SKS {total} exceeds the limit of {max}")]
    SksLimitExceeded { total: i64, max: u32 },

    #[error("course prerequisites are not met")]
    PrerequisitesNotMet,

    #[error("the schedule has a conflict")]
    ScheduleConflict,
}

pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &str;

    fn check(&self, data: &RegistrationData) -> Result<(), RuleViolation>;

    /// Runs `check` once and logs the outcome.
    fn validate(&self, data: &RegistrationData) -> bool {
        match self.check(data) {
            Ok(()) => {
                tracing::info!(target: "registration", rule = self.name(), "validation passed");
                true
            }
            Err(violation) => {
                tracing::warn!(
                    target: "registration",
                    rule = self.name(),
                    "validation failed: {violation}"
                );
                false
            }
        }
    }
}
