//! Typed records for the disease and hospital tables.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref QUALIFIER: Regex = Regex::new(r"\([^)]*\)").unwrap();
}

/// Parse a comma-separated department list.
///
/// Parenthetical qualifiers such as `내과(소화기)` are stripped, names are
/// trimmed and empty names dropped.
pub fn parse_departments(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(|name| QUALIFIER.replace_all(name.trim(), "").trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// A row of the disease-to-department table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Trimmed symptom phrases, in table order.
    pub symptoms: Vec<String>,
    /// Recommended departments.
    pub departments: BTreeSet<String>,
}

impl DiseaseRecord {
    /// Build a record from the raw symptom and department cells.
    pub fn from_raw(symptom_text: &str, department_text: &str) -> Self {
        DiseaseRecord {
            symptoms: symptom_text
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            departments: parse_departments(department_text),
        }
    }

    /// Whether `phrase` occurs inside any of this record's symptom phrases.
    pub fn mentions(&self, phrase: &str) -> bool {
        self.symptoms.iter().any(|symptom| symptom.contains(phrase))
    }
}

/// An active hospital from the hospital table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub name: String,
    pub facility_type: String,
    pub departments: BTreeSet<String>,
    /// Road address exactly as registered.
    pub raw_location: String,
}

impl HospitalRecord {
    /// Build a record from the raw table cells.
    pub fn from_raw(name: &str, facility_type: &str, department_text: &str, location: &str) -> Self {
        HospitalRecord {
            name: name.to_string(),
            facility_type: facility_type.to_string(),
            departments: parse_departments(department_text),
            raw_location: location.to_string(),
        }
    }

    /// Requested departments this hospital offers, in request order.
    pub fn offered<'a, I>(&self, requested: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        requested
            .into_iter()
            .filter(|department| self.departments.contains(*department))
            .cloned()
            .collect()
    }
}
