//! Request orchestration: from a symptom message and a location to a response.

pub mod engine;
pub mod types;

pub use engine::{Outcome, Recommender};
pub use types::{HealthStatus, RecommendRequest, RecommendResponse};
