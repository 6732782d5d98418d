// Student course registration input.
//
// Purpose
// - Typed view over the registration mapping (`total_sks`, `prasyarat_ok`, `jadwal_bentrok`).
//
// Responsibilities
// - Fill missing keys with neutral defaults: zero credits, prerequisites not met, no conflict.
// - Stay read-only for the rules that inspect it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrationData {
    #[serde(rename = "nama")]
    pub student_name: String,
    /// Signed like the source mapping; a negative total is below any limit.
    pub total_sks: i64,
    #[serde(rename = "prasyarat_ok")]
    pub prerequisites_met: bool,
    #[serde(rename = "jadwal_bentrok")]
    pub schedule_conflict: bool,
}

impl RegistrationData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod registration_data_tests {
    use super::*;
    use crate::test_support::fixtures::registration_data::RegistrationDataBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_full_mapping() {
        let data = RegistrationData::from_json(
            r#"{"nama": "Andi", "total_sks": 22, "prasyarat_ok": true, "jadwal_bentrok": false}"#,
        )
        .unwrap();
        assert_eq!(data, RegistrationDataBuilder::new().build());
    }

    #[rstest]
    fn it_should_default_missing_keys() {
        let data = RegistrationData::from_json("{}").unwrap();
        assert_eq!(data.student_name, "");
        assert_eq!(data.total_sks, 0);
        assert!(!data.prerequisites_met);
        assert!(!data.schedule_conflict);
    }

    #[rstest]
    fn it_should_ignore_unknown_keys() {
        let data = RegistrationData::from_json(r#"{"total_sks": 18, "semester": 3}"#).unwrap();
        assert_eq!(data.total_sks, 18);
    }

    #[rstest]
    fn it_should_keep_a_negative_total() {
        let data = RegistrationData::from_json(r#"{"total_sks": -1}"#).unwrap();
        assert_eq!(data.total_sks, -1);
    }

    #[rstest]
    #[case(r#"{"total_sks": 2.5}"#)]
    #[case(r#"{"prasyarat_ok": "yes"}"#)]
    #[case("not json")]
    fn it_should_reject_malformed_input(#[case] raw: &str) {
        assert!(RegistrationData::from_json(raw).is_err());
    }
}
