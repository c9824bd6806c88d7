//! Hospital matching on departments and normalized addresses.
//!
//! Both the department-specific search and the university-hospital fallback
//! share one address policy: a hospital whose normalized address *starts with*
//! the normalized user location is a strict match, one that merely *contains*
//! it is a flexible match, and flexible matches are only returned when there
//! is no strict match at all.

pub mod fallback;
pub mod hospital;
pub mod result;
pub mod tier;

pub use fallback::FallbackResolver;
pub use hospital::HospitalMatcher;
pub use result::MatchResult;
pub use tier::{MatchTier, TieredMatches};
