pub mod scoring;

pub use scoring::{InfluenceScoringService, LOG_REFERENCE_INFLUENCE};
