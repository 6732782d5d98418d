// Shared test fixture for RegistrationData.
// The baseline is read from json/registration_data.json, the same mapping
// shape the demo binary feeds the registration service.

use crate::modules::registration::core::registration_data::RegistrationData;
use std::fs;

const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/test_support/fixtures/json/registration_data.json"
);

pub struct RegistrationDataBuilder {
    inner: RegistrationData,
}

impl Default for RegistrationDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationDataBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(FIXTURE_PATH).unwrap();
        Self {
            inner: RegistrationData::from_json(&json_str).unwrap(),
        }
    }

    pub fn student_name(mut self, v: impl Into<String>) -> Self {
        self.inner.student_name = v.into();
        self
    }

    pub fn total_sks(mut self, v: i64) -> Self {
        self.inner.total_sks = v;
        self
    }

    pub fn prerequisites_met(mut self, v: bool) -> Self {
        self.inner.prerequisites_met = v;
        self
    }

    pub fn schedule_conflict(mut self, v: bool) -> Self {
        self.inner.schedule_conflict = v;
        self
    }

    pub fn build(self) -> RegistrationData {
        self.inner
    }
}

#[cfg(test)]
mod registration_data_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegistrationDataBuilder::default().build();
        assert_eq!(built.student_name, "Andi");
        assert_eq!(built.total_sks, 22);
        assert!(built.prerequisites_met);
        assert!(!built.schedule_conflict);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = RegistrationDataBuilder::new()
            .student_name("Budi")
            .total_sks(30)
            .prerequisites_met(false)
            .schedule_conflict(true)
            .build();
        assert_eq!(built.student_name, "Budi");
        assert_eq!(built.total_sks, 30);
        assert!(!built.prerequisites_met);
        assert!(built.schedule_conflict);
    }
}
