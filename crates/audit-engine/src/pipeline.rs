use crate::compliance::verify_compliance;
use crate::config::ScoringConfig;
use crate::fields::extract_fields;
use crate::fraud::detect_fraud;
use crate::risk::RiskScorer;
use fiscal_protocol::{
    ApplicantRecord, AuditReport, ComplianceReport, ExtractedDocument, ExtractionSummary,
    FieldReport, FraudReport,
};

/// The three text-derived reports for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAnalysis {
    pub fields: FieldReport,
    pub fraud: FraudReport,
    pub compliance: ComplianceReport,
}

pub fn analyze_document(document: &ExtractedDocument) -> DocumentAnalysis {
    let fields = extract_fields(&document.raw_text);
    let fraud = detect_fraud(&document.raw_text);
    let compliance = verify_compliance(&fields, &fraud);
    DocumentAnalysis {
        fields,
        fraud,
        compliance,
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditEngine {
    scorer: RiskScorer,
}

impl AuditEngine {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            scorer: RiskScorer::from_config(config),
        }
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Run the document stages and, when an applicant record is supplied, the
    /// risk scorer.
    pub fn evaluate(
        &self,
        document: &ExtractedDocument,
        applicant: Option<&ApplicantRecord>,
    ) -> AuditReport {
        let DocumentAnalysis {
            fields,
            fraud,
            compliance,
        } = analyze_document(document);
        let verdict = applicant.map(|record| self.scorer.score(record));

        match &verdict {
            Some(verdict) => tracing::info!(
                detected = fraud.detected_patterns.len(),
                compliance = compliance.compliance_score,
                score = verdict.score,
                tier = verdict.tier.as_str(),
                "audit evaluated"
            ),
            None => tracing::info!(
                detected = fraud.detected_patterns.len(),
                compliance = compliance.compliance_score,
                "document analyzed without applicant record"
            ),
        }

        AuditReport {
            document: ExtractionSummary::from(document),
            fields,
            fraud,
            compliance,
            verdict,
        }
    }
}
