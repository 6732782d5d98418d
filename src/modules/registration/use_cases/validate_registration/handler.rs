// Registration coordinator.
//
// Responsibilities
// - Hold an ordered list of injected validation rules.
// - Evaluate them in order and stop at the first rule that fails.
// - Accept new rules without changes to this file.

use crate::modules::registration::core::ports::ValidationRule;
use crate::modules::registration::core::registration_data::RegistrationData;

#[derive(Default)]
pub struct RegistrationService {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RegistrationService {
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Appends a rule after the existing ones.
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn validate(&self, data: &RegistrationData) -> bool {
        tracing::info!(
            target: "registration",
            student = %data.student_name,
            rules = self.rules.len(),
            "starting registration validation"
        );

        if let Some(failed) = self.rules.iter().find(|rule| !rule.validate(data)) {
            tracing::error!(
                target: "registration",
                rule = failed.name(),
                "registration validation failed"
            );
            return false;
        }

        tracing::info!(target: "registration", "registration validation passed");
        true
    }
}
