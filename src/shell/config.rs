// Demo configuration.
//
// Purpose
// - Gather the constants the demo scenarios run with in one place.
//
// Boundaries
// - Nothing is read from files. The only environment input is RUST_LOG,
//   which the logging setup consults before falling back to `log_filter`.

use crate::modules::registration::core::registration_data::RegistrationData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCustomer {
    pub name: String,
    pub total_price: u64,
}

impl DemoCustomer {
    pub fn new(name: impl Into<String>, total_price: u64) -> Self {
        Self {
            name: name.into(),
            total_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_filter: String,
    pub card_customer: DemoCustomer,
    pub qris_customer: DemoCustomer,
    pub max_sks: u32,
    pub student: RegistrationData,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            card_customer: DemoCustomer::new("Andi", 500_000),
            qris_customer: DemoCustomer::new("Budi", 100_000),
            max_sks: 24,
            student: RegistrationData {
                student_name: "Andi".to_string(),
                total_sks: 22,
                prerequisites_met: true,
                schedule_conflict: false,
            },
        }
    }
}

#[cfg(test)]
mod demo_config_tests {
    use super::*;
    use crate::test_support::fixtures::registration_data::RegistrationDataBuilder;
    use rstest::rstest;

    #[rstest]
    fn default_should_match_the_demo_scenarios() {
        let config = DemoConfig::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.card_customer, DemoCustomer::new("Andi", 500_000));
        assert_eq!(config.qris_customer, DemoCustomer::new("Budi", 100_000));
        assert_eq!(config.max_sks, 24);
        assert_eq!(config.student, RegistrationDataBuilder::new().build());
    }
}
