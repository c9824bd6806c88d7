//! Department-aware hospital matching.

use std::collections::BTreeSet;

use log::debug;

use crate::address::normalize;
use crate::dataset::HospitalRecord;
use crate::matching::result::MatchResult;
use crate::matching::tier::{MatchTier, TieredMatches};

/// Finds hospitals that offer a requested department near a location.
pub struct HospitalMatcher<'a> {
    hospitals: &'a [HospitalRecord],
}

impl<'a> HospitalMatcher<'a> {
    pub fn new(hospitals: &'a [HospitalRecord]) -> Self {
        HospitalMatcher { hospitals }
    }

    /// Hospitals offering any of `departments` whose address matches `location`.
    ///
    /// A hospital without any requested department is never returned, however
    /// well its address matches. Strict address matches are returned when there
    /// are any; otherwise flexible ones. Each entry lists only the requested
    /// departments the hospital offers.
    pub fn find_matches(&self, location: &str, departments: &BTreeSet<String>) -> Vec<MatchResult> {
        let user_norm = normalize(location);
        let mut matches = TieredMatches::new();

        for hospital in self.hospitals {
            let offered = hospital.offered(departments);
            if offered.is_empty() {
                continue;
            }

            if let Some(tier) = MatchTier::classify(&normalize(&hospital.raw_location), &user_norm) {
                matches.push(tier, MatchResult::for_hospital(hospital, offered));
            }
        }

        debug!(
            "Hospital match for '{user_norm}': {} strict, {} flexible",
            matches.strict_len(),
            matches.flexible_len()
        );
        matches.into_preferred()
    }
}
