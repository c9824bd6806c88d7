//! University-hospital fallback.

use log::debug;

use crate::address::normalize;
use crate::config::{DEFAULT_FALLBACK_LABEL, DEFAULT_FALLBACK_MARKER};
use crate::dataset::HospitalRecord;
use crate::matching::result::MatchResult;
use crate::matching::tier::{MatchTier, TieredMatches};

/// Recommends university hospitals near a location, ignoring departments.
pub struct FallbackResolver<'a> {
    hospitals: &'a [HospitalRecord],
    marker: &'a str,
    label: &'a str,
}

impl<'a> FallbackResolver<'a> {
    /// A resolver using the default "대학교병원" marker and label.
    pub fn new(hospitals: &'a [HospitalRecord]) -> Self {
        Self::with_marker(hospitals, DEFAULT_FALLBACK_MARKER, DEFAULT_FALLBACK_LABEL)
    }

    /// A resolver with a custom name marker and department label.
    pub fn with_marker(hospitals: &'a [HospitalRecord], marker: &'a str, label: &'a str) -> Self {
        FallbackResolver {
            hospitals,
            marker,
            label,
        }
    }

    /// Marked hospitals near `location`, strict address matches preferred.
    pub fn fallback_match(&self, location: &str) -> Vec<MatchResult> {
        let user_norm = normalize(location);
        let mut matches = TieredMatches::new();

        for hospital in self.hospitals.iter().filter(|h| h.name.contains(self.marker)) {
            if let Some(tier) = MatchTier::classify(&normalize(&hospital.raw_location), &user_norm) {
                matches.push(
                    tier,
                    MatchResult::for_hospital(hospital, vec![self.label.to_string()]),
                );
            }
        }

        debug!(
            "Fallback match for '{user_norm}': {} strict, {} flexible",
            matches.strict_len(),
            matches.flexible_len()
        );
        matches.into_preferred()
    }
}
