//! # carematch
//!
//! Recommends hospitals from a free-text symptom description and a free-text
//! location.
//!
//! ## Pipeline
//!
//! - Spacing correction of the symptom message with a pluggable tokenizer
//! - Symptom-to-department resolution: direct substring match, then
//!   synonym-expanded match
//! - Hospital matching on offered departments and normalized addresses, strict
//!   prefix matches preferred over looser containment matches
//! - University-hospital fallback, then a single explanatory placeholder
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use carematch::analysis::tokenizer::WhitespaceTokenizer;
//! use carematch::dataset::{DiseaseRecord, HospitalRecord, Repository};
//! use carematch::recommend::{RecommendRequest, Recommender};
//!
//! let repository = Repository::new(
//!     vec![DiseaseRecord::from_raw("두통, 어지러움", "신경과")],
//!     vec![HospitalRecord::from_raw("관저신경과의원", "의원", "신경과", "대전광역시 서구 관저동 99")],
//!     &[],
//! );
//! let recommender = Recommender::new(Arc::new(repository), Arc::new(WhitespaceTokenizer::new()));
//!
//! let response = recommender.recommend(&RecommendRequest::new("두통", "대전 서구 관저동"));
//! assert_eq!(response.recommendations()[0].name.as_deref(), Some("관저신경과의원"));
//! ```

pub mod address;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod matching;
pub mod recommend;
pub mod resolve;
pub mod synonym;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
