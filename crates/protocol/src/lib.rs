use serde::{Deserialize, Serialize};

pub mod applicant;
pub mod report;

pub use applicant::ApplicantRecord;
pub use report::{
    CheckName, ComplianceReport, FieldReport, FieldTag, FraudReport, PatternName, RiskCheck,
    RiskTier, RiskVerdict,
};

/// Output of the extraction service, already reduced to what the audit needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedDocument {
    #[serde(default, alias = "markdown")]
    pub raw_text: String,
    #[serde(default)]
    pub chunk_count: u32,
    #[serde(default)]
    pub credits_used: f64,
}

impl ExtractedDocument {
    pub fn from_text(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionSummary {
    pub chunk_count: u32,
    pub credits_used: f64,
    pub content_length: usize,
}

impl From<&ExtractedDocument> for ExtractionSummary {
    fn from(document: &ExtractedDocument) -> Self {
        Self {
            chunk_count: document.chunk_count,
            credits_used: document.credits_used,
            content_length: document.raw_text.chars().count(),
        }
    }
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditReport {
    pub document: ExtractionSummary,
    pub fields: FieldReport,
    pub fraud: FraudReport,
    pub compliance: ComplianceReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<RiskVerdict>,
}
