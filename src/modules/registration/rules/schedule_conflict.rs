// Rejects a registration whose course schedule overlaps.

use crate::modules::registration::core::ports::{RuleViolation, ValidationRule};
use crate::modules::registration::core::registration_data::RegistrationData;

#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleConflictRule;

impl ScheduleConflictRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for ScheduleConflictRule {
    fn name(&self) -> &str {
        "schedule_conflict"
    }

    fn check(&self, data: &RegistrationData) -> Result<(), RuleViolation> {
        if data.schedule_conflict {
            return Err(RuleViolation::ScheduleConflict);
        }
        Ok(())
    }
}
