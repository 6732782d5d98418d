// Requires the prerequisites of every requested course to be completed.

use crate::modules::registration::core::ports::{RuleViolation, ValidationRule};
use crate::modules::registration::core::registration_data::RegistrationData;

#[derive(Debug, Default, Clone, Copy)]
pub struct PrerequisiteRule;

impl PrerequisiteRule {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for PrerequisiteRule {
    fn name(&self) -> &str {
        "prerequisite"
    }

    fn check(&self, data: &RegistrationData) -> Result<(), RuleViolation> {
        if !data.prerequisites_met {
            return Err(RuleViolation::PrerequisitesNotMet);
        }
        Ok(())
    }
}
