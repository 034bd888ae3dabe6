use crate::config::ScoringConfig;
use fiscal_protocol::{ApplicantRecord, RiskCheck, RiskTier, RiskVerdict};
use std::collections::HashSet;

pub const HIGH_RISK_THRESHOLD: u32 = 70;
pub const MEDIUM_RISK_THRESHOLD: u32 = 40;
pub const MAX_SCORE: u32 = 100;

const INCOME_DISCREPANCY_LIMIT: f64 = 0.25;
const INVALID_ACCREDITATION: [&str; 3] = ["revoked", "suspended", "expired"];

pub fn weight(check: RiskCheck) -> u32 {
    match check {
        RiskCheck::DuplicateApplication => 25,
        RiskCheck::IncomeVerification => 20,
        RiskCheck::CredentialValidity => 20,
        RiskCheck::BusinessHistory => 15,
        RiskCheck::DocumentationQuality => 10,
        RiskCheck::GeographicPattern => 10,
    }
}

pub fn total_score<I>(triggered: I) -> u32
where
    I: IntoIterator<Item = RiskCheck>,
{
    triggered.into_iter().map(weight).sum()
}

pub fn tier_for(score: u32) -> RiskTier {
    if score >= HIGH_RISK_THRESHOLD {
        RiskTier::HighRisk
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskTier::MediumRisk
    } else {
        RiskTier::LowRisk
    }
}

/// Weighted applicant risk scoring over six independent checks.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    known_duplicates: HashSet<String>,
    high_risk_zips: HashSet<String>,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl RiskScorer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            known_duplicates: config.known_duplicates.iter().cloned().collect(),
            high_risk_zips: config.high_risk_zips.iter().cloned().collect(),
        }
    }

    pub fn score(&self, record: &ApplicantRecord) -> RiskVerdict {
        let triggered_checks = RiskCheck::ALL
            .into_iter()
            .filter(|check| self.is_triggered(*check, record))
            .collect::<Vec<_>>();
        let score = total_score(triggered_checks.iter().copied());
        debug_assert!(score <= MAX_SCORE);
        let tier = tier_for(score);
        tracing::debug!(
            applicant = %record.applicant_id,
            score,
            tier = tier.as_str(),
            "applicant scored"
        );
        RiskVerdict {
            score,
            tier,
            triggered_checks,
        }
    }

    pub fn is_triggered(&self, check: RiskCheck, record: &ApplicantRecord) -> bool {
        match check {
            RiskCheck::DuplicateApplication => self.known_duplicates.contains(&record.applicant_id),
            RiskCheck::IncomeVerification => income_unverified(record),
            RiskCheck::CredentialValidity => credentials_invalid(record),
            RiskCheck::BusinessHistory => business_unproven(record),
            RiskCheck::DocumentationQuality => documentation_lacking(record),
            RiskCheck::GeographicPattern => self.high_risk_zips.contains(&record.zip_code),
        }
    }
}

fn income_unverified(record: &ApplicantRecord) -> bool {
    if !record.has_w2 {
        return true;
    }
    if record.verified_income > 0.0 {
        let discrepancy =
            (record.reported_income - record.verified_income).abs() / record.verified_income;
        return discrepancy > INCOME_DISCREPANCY_LIMIT;
    }
    false
}

fn credentials_invalid(record: &ApplicantRecord) -> bool {
    if record.license_expired {
        return true;
    }
    let status = record.accreditation_status.to_lowercase();
    INVALID_ACCREDITATION.contains(&status.as_str())
}

fn business_unproven(record: &ApplicantRecord) -> bool {
    if record.business_age_years < 1.0 {
        return true;
    }
    !record.has_prior_contracts && record.business_age_years < 3.0
}

fn documentation_lacking(record: &ApplicantRecord) -> bool {
    let missing = [
        record.id_verified,
        record.address_verified,
        record.income_documented,
    ]
    .iter()
    .filter(|present| !**present)
    .count();
    missing >= 2 || !record.id_verified
}
