use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldTag {
    FinancialAmounts,
    SsnPattern,
    BusinessName,
    ZipCode,
}

impl FieldTag {
    pub fn label(self) -> &'static str {
        match self {
            FieldTag::FinancialAmounts => "financial amounts",
            FieldTag::SsnPattern => "SSN patterns",
            FieldTag::BusinessName => "business names",
            FieldTag::ZipCode => "zip codes",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldReport {
    pub fields_extracted: Vec<FieldTag>,
    pub word_count: usize,
    pub char_count: usize,
    pub has_financial_data: bool,
}

/// GAO fraud pattern categories.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternName {
    DuplicateApplications,
    DeceasedBeneficiaries,
    IncomeMismatches,
    SuspiciousAmounts,
    CredentialFraud,
}

impl PatternName {
    pub const CATALOG: [PatternName; 5] = [
        PatternName::DuplicateApplications,
        PatternName::DeceasedBeneficiaries,
        PatternName::IncomeMismatches,
        PatternName::SuspiciousAmounts,
        PatternName::CredentialFraud,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PatternName::DuplicateApplications => "Duplicate Applications",
            PatternName::DeceasedBeneficiaries => "Deceased Beneficiaries",
            PatternName::IncomeMismatches => "Income Mismatches",
            PatternName::SuspiciousAmounts => "Suspicious Amounts",
            PatternName::CredentialFraud => "Credential Fraud",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FraudReport {
    pub patterns_checked: Vec<PatternName>,
    pub detected_patterns: Vec<PatternName>,
    pub risk_factors: u32,
}

impl Default for FraudReport {
    fn default() -> Self {
        Self {
            patterns_checked: PatternName::CATALOG.to_vec(),
            detected_patterns: Vec::new(),
            risk_factors: 0,
        }
    }
}

/// Compliance checklist entries.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckName {
    EligibilityRequirements,
    DocumentationCompleteness,
    AmountAccuracy,
    RegulatoryCompliance,
}

impl CheckName {
    pub const CATALOG: [CheckName; 4] = [
        CheckName::EligibilityRequirements,
        CheckName::DocumentationCompleteness,
        CheckName::AmountAccuracy,
        CheckName::RegulatoryCompliance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CheckName::EligibilityRequirements => "Eligibility Requirements",
            CheckName::DocumentationCompleteness => "Documentation Completeness",
            CheckName::AmountAccuracy => "Amount Accuracy",
            CheckName::RegulatoryCompliance => "Regulatory Compliance",
        }
    }

    /// Name of the evidence test that can pass this check, if one is wired in.
    pub fn evidence_label(self) -> Option<&'static str> {
        match self {
            CheckName::AmountAccuracy => Some("Financial Documentation"),
            CheckName::DocumentationCompleteness => Some("Data Completeness"),
            CheckName::EligibilityRequirements | CheckName::RegulatoryCompliance => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceReport {
    pub checks_defined: Vec<CheckName>,
    pub passed_checks: Vec<CheckName>,
    pub compliance_score: u32,
}

impl Default for ComplianceReport {
    fn default() -> Self {
        Self {
            checks_defined: CheckName::CATALOG.to_vec(),
            passed_checks: Vec::new(),
            compliance_score: 0,
        }
    }
}

/// The six weighted checks applied to an applicant record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCheck {
    DuplicateApplication,
    IncomeVerification,
    CredentialValidity,
    BusinessHistory,
    DocumentationQuality,
    GeographicPattern,
}

impl RiskCheck {
    pub const ALL: [RiskCheck; 6] = [
        RiskCheck::DuplicateApplication,
        RiskCheck::IncomeVerification,
        RiskCheck::CredentialValidity,
        RiskCheck::BusinessHistory,
        RiskCheck::DocumentationQuality,
        RiskCheck::GeographicPattern,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskCheck::DuplicateApplication => "Duplicate application",
            RiskCheck::IncomeVerification => "Income verification",
            RiskCheck::CredentialValidity => "Credential validity",
            RiskCheck::BusinessHistory => "Business history",
            RiskCheck::DocumentationQuality => "Documentation quality",
            RiskCheck::GeographicPattern => "Geographic pattern",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::LowRisk => "LOW_RISK",
            RiskTier::MediumRisk => "MEDIUM_RISK",
            RiskTier::HighRisk => "HIGH_RISK",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskVerdict {
    pub score: u32,
    pub tier: RiskTier,
    #[serde(default)]
    pub triggered_checks: Vec<RiskCheck>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_screaming_snake_case_on_the_wire() {
        let json = serde_json::to_string(&PatternName::DeceasedBeneficiaries).expect("serialize");
        assert_eq!(json, "\"DECEASED_BENEFICIARIES\"");
        let json = serde_json::to_string(&RiskTier::MediumRisk).expect("serialize");
        assert_eq!(json, format!("\"{}\"", RiskTier::MediumRisk.as_str()));
        let tag: FieldTag = serde_json::from_str("\"SSN_PATTERN\"").expect("deserialize");
        assert_eq!(tag, FieldTag::SsnPattern);
    }

    #[test]
    fn default_reports_list_full_catalogs() {
        let fraud = FraudReport::default();
        assert_eq!(fraud.patterns_checked, PatternName::CATALOG.to_vec());
        assert!(fraud.detected_patterns.is_empty());

        let compliance = ComplianceReport::default();
        assert_eq!(compliance.checks_defined, CheckName::CATALOG.to_vec());
        assert!(compliance.passed_checks.is_empty());
    }

    #[test]
    fn only_two_checks_have_evidence() {
        let wired: Vec<_> = CheckName::CATALOG
            .iter()
            .filter(|check| check.evidence_label().is_some())
            .collect();
        assert_eq!(wired.len(), 2);
    }
}
