//! Engine configuration.
//!
//! Every field has a default matching the public hospital and symptom tables,
//! so a JSON config file only needs the fields it changes:
//!
//! ```json
//! {
//!   "datasets": { "hospitals": "data/hospital_data.csv" },
//!   "tokenizer_scores": "data/l_scores.json"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::LTokenizer;
use crate::error::{CarematchError, Result};

/// Operating status of hospitals that are kept by the loader.
pub const DEFAULT_ACTIVE_STATUS: &str = "영업중";

/// Name marker of hospitals eligible as fallback recommendations.
pub const DEFAULT_FALLBACK_MARKER: &str = "대학교병원";

/// Department label attached to fallback recommendations.
pub const DEFAULT_FALLBACK_LABEL: &str = "기본 추천 (대학교병원)";

/// Locations of the three source tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetPaths {
    pub hospitals: PathBuf,
    pub diseases: PathBuf,
    pub synonyms: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            hospitals: PathBuf::from("hospital_data.csv"),
            diseases: PathBuf::from("disease_name.csv"),
            synonyms: PathBuf::from("synonym_normalized.csv"),
        }
    }
}

/// Configuration for loading data and building a recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Source table locations.
    pub datasets: DatasetPaths,
    /// Optional JSON file of L-tokenizer scores.
    pub tokenizer_scores: Option<PathBuf>,
    /// Hospitals whose status differs from this are dropped at load time.
    pub active_status: String,
    /// Substring of a hospital name that marks a fallback candidate.
    pub fallback_marker: String,
    /// Department label given to fallback recommendations.
    pub fallback_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            datasets: DatasetPaths::default(),
            tokenizer_scores: None,
            active_status: DEFAULT_ACTIVE_STATUS.to_string(),
            fallback_marker: DEFAULT_FALLBACK_MARKER.to_string(),
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file; missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CarematchError::config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: EngineConfig = serde_json::from_str(&content).map_err(|e| {
            CarematchError::config(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make every fallback name match.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_marker.trim().is_empty() {
            return Err(CarematchError::config("fallback_marker must not be empty"));
        }
        if self.active_status.trim().is_empty() {
            return Err(CarematchError::config("active_status must not be empty"));
        }
        Ok(())
    }

    /// Build the configured tokenizer.
    pub fn tokenizer(&self) -> Result<LTokenizer> {
        match &self.tokenizer_scores {
            Some(path) => LTokenizer::load_scores(path),
            None => Ok(LTokenizer::new()),
        }
    }
}
