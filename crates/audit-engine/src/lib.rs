//! Document audit stages: field extraction, fraud pattern detection,
//! compliance verification and applicant risk scoring.

pub mod compliance;
pub mod config;
pub mod fields;
pub mod fraud;
pub mod pipeline;
pub mod risk;

pub use compliance::verify_compliance;
pub use config::ScoringConfig;
pub use fields::extract_fields;
pub use fraud::detect_fraud;
pub use pipeline::{analyze_document, AuditEngine, DocumentAnalysis};
pub use risk::RiskScorer;
