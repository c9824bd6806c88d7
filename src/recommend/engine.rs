//! The recommendation state machine.
//!
//! ```text
//! ParseInput ─► ResolveDepartments ─┬─(empty)──────────────► FallbackMatch
//!                                   └─► MatchHospitals ─┬─(non-empty)─► Success
//!                                                       └─(empty)─────► FallbackMatch
//! FallbackMatch ─┬─(non-empty)─► Fallback
//!                └─(empty)─────► NoResult (one placeholder entry)
//! ```
//!
//! A [`Recommender`] holds only shared read-only state, so one instance can
//! serve any number of threads concurrently.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, error, info};

use crate::analysis::spacing::correct_spacing;
use crate::analysis::tokenizer::Tokenizer;
use crate::config::{DEFAULT_FALLBACK_LABEL, DEFAULT_FALLBACK_MARKER, EngineConfig};
use crate::dataset::Repository;
use crate::error::Result;
use crate::matching::{FallbackResolver, HospitalMatcher, MatchResult};
use crate::recommend::types::{RecommendRequest, RecommendResponse};
use crate::resolve::DepartmentResolver;

/// Terminal state of one recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Hospitals offering the resolved departments were found.
    Success {
        recommendations: Vec<MatchResult>,
        departments: BTreeSet<String>,
    },
    /// No department-specific match; university hospitals near the location.
    Fallback { recommendations: Vec<MatchResult> },
    /// Nothing at all; a single explanatory entry.
    NoResult { placeholder: MatchResult },
}

impl Outcome {
    /// The entries this outcome recommends. Never empty.
    pub fn recommendations(&self) -> &[MatchResult] {
        match self {
            Outcome::Success {
                recommendations, ..
            }
            | Outcome::Fallback { recommendations } => recommendations,
            Outcome::NoResult { placeholder } => std::slice::from_ref(placeholder),
        }
    }
}

impl From<Outcome> for RecommendResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success {
                recommendations,
                departments,
            } => RecommendResponse::Recommendations {
                recommendations,
                matched_department: Some(departments.into_iter().collect()),
            },
            Outcome::Fallback { recommendations } => RecommendResponse::Recommendations {
                recommendations,
                matched_department: None,
            },
            Outcome::NoResult { placeholder } => RecommendResponse::Recommendations {
                recommendations: vec![placeholder],
                matched_department: None,
            },
        }
    }
}

/// Maps symptom messages and locations to recommended hospitals.
#[derive(Clone)]
pub struct Recommender {
    repository: Arc<Repository>,
    tokenizer: Arc<dyn Tokenizer>,
    fallback_marker: String,
    fallback_label: String,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("hospitals", &self.repository.hospitals().len())
            .field("diseases", &self.repository.diseases().len())
            .field("tokenizer", &self.tokenizer.name())
            .field("fallback_marker", &self.fallback_marker)
            .finish()
    }
}

impl Recommender {
    /// A recommender with the default fallback marker and label.
    pub fn new(repository: Arc<Repository>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Recommender {
            repository,
            tokenizer,
            fallback_marker: DEFAULT_FALLBACK_MARKER.to_string(),
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string(),
        }
    }

    /// Override the fallback marker and label.
    pub fn with_fallback<M: Into<String>, L: Into<String>>(mut self, marker: M, label: L) -> Self {
        self.fallback_marker = marker.into();
        self.fallback_label = label.into();
        self
    }

    /// Load the tables and tokenizer named by `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let repository = Repository::load(&config.datasets, &config.active_status)?;
        let tokenizer = config.tokenizer()?;
        info!(
            "Using tokenizer '{}' with {} scored terms",
            tokenizer.name(),
            tokenizer.len()
        );

        Ok(Self::new(Arc::new(repository), Arc::new(tokenizer))
            .with_fallback(&config.fallback_marker, &config.fallback_label))
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Departments for a raw symptom message, after spacing correction.
    pub fn resolve_departments(&self, message: &str) -> Result<BTreeSet<String>> {
        let corrected = correct_spacing(self.tokenizer.as_ref(), message);
        debug!("Spacing corrected '{message}' to '{corrected}'");

        DepartmentResolver::new(&self.repository, self.tokenizer.as_ref()).resolve(&corrected)
    }

    /// Run the state machine for one request.
    pub fn run(&self, request: &RecommendRequest) -> Result<Outcome> {
        let departments = self.resolve_departments(&request.message)?;

        if departments.is_empty() {
            debug!("No departments for '{}', falling back", request.message);
        } else {
            let recommendations = HospitalMatcher::new(self.repository.hospitals())
                .find_matches(&request.location, &departments);
            if !recommendations.is_empty() {
                return Ok(Outcome::Success {
                    recommendations,
                    departments,
                });
            }
            debug!(
                "No hospital offers {departments:?} near '{}', falling back",
                request.location
            );
        }

        let recommendations = FallbackResolver::with_marker(
            self.repository.hospitals(),
            &self.fallback_marker,
            &self.fallback_label,
        )
        .fallback_match(&request.location);

        if recommendations.is_empty() {
            Ok(Outcome::NoResult {
                placeholder: MatchResult::placeholder(&request.message, &request.location),
            })
        } else {
            Ok(Outcome::Fallback { recommendations })
        }
    }

    /// Answer one request; failures become an error response.
    pub fn recommend(&self, request: &RecommendRequest) -> RecommendResponse {
        match self.run(request) {
            Ok(outcome) => outcome.into(),
            Err(e) => {
                error!("Recommendation for '{}' failed: {}", request.message, e);
                RecommendResponse::error(e.to_string())
            }
        }
    }
}
