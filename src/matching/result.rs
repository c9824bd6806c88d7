//! Recommendation entries returned to callers.

use serde::{Deserialize, Serialize};

use crate::dataset::HospitalRecord;

/// One recommended facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Facility name; `None` only for the no-result placeholder.
    pub name: Option<String>,
    /// Registered road address, or the user's location for the placeholder.
    pub location: String,
    /// Departments that made this entry match, or an explanatory label.
    pub matched_department: Vec<String>,
}

impl MatchResult {
    /// An entry for `hospital` carrying `matched_department`.
    pub fn for_hospital(hospital: &HospitalRecord, matched_department: Vec<String>) -> Self {
        MatchResult {
            name: Some(hospital.name.clone()),
            location: hospital.raw_location.clone(),
            matched_department,
        }
    }

    /// The single entry returned when nothing could be recommended.
    pub fn placeholder(message: &str, location: &str) -> Self {
        MatchResult {
            name: None,
            location: location.to_string(),
            matched_department: vec![format!(
                "'{message}' 증상에 해당하는 진료과와 '{location}' 지역의 대학교병원을 찾을 수 없습니다."
            )],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name.is_none()
    }
}
