use fiscal_protocol::{FraudReport, PatternName};
use regex::Regex;
use std::sync::OnceLock;

pub const RISK_FACTOR_PER_PATTERN: u32 = 20;

enum Evidence {
    Keywords(&'static [&'static str]),
    LargeDollarAmount,
}

/// Evaluated in order; every rule runs. DECEASED_BENEFICIARIES has no rule yet
/// and is therefore never detected.
const DETECTION_RULES: [(PatternName, Evidence); 4] = [
    (
        PatternName::DuplicateApplications,
        Evidence::Keywords(&["duplicate", "copy", "same"]),
    ),
    (PatternName::SuspiciousAmounts, Evidence::LargeDollarAmount),
    (
        PatternName::IncomeMismatches,
        Evidence::Keywords(&["income", "salary", "revenue"]),
    ),
    (
        PatternName::CredentialFraud,
        Evidence::Keywords(&["new", "recent", "started"]),
    ),
];

fn large_dollar_amount() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\$\d{6,}").expect("valid amount pattern"))
}

impl Evidence {
    fn found_in(&self, lowered: &str) -> bool {
        match self {
            Evidence::Keywords(words) => words.iter().any(|word| lowered.contains(word)),
            Evidence::LargeDollarAmount => large_dollar_amount().is_match(lowered),
        }
    }
}

/// Scan text for evidence of the GAO fraud pattern catalog.
pub fn detect_fraud(raw_text: &str) -> FraudReport {
    let lowered = raw_text.to_lowercase();
    let detected = DETECTION_RULES
        .iter()
        .filter(|(_, evidence)| evidence.found_in(&lowered))
        .map(|(pattern, _)| *pattern)
        .collect::<Vec<_>>();
    let report = fraud_report(detected);
    tracing::debug!(
        detected = report.detected_patterns.len(),
        risk_factors = report.risk_factors,
        "fraud patterns scanned"
    );
    report
}

pub(crate) fn fraud_report(detected: Vec<PatternName>) -> FraudReport {
    for pattern in &detected {
        assert!(
            PatternName::CATALOG.contains(pattern),
            "detection rule {pattern:?} is not in the pattern catalog"
        );
    }
    FraudReport {
        patterns_checked: PatternName::CATALOG.to_vec(),
        risk_factors: RISK_FACTOR_PER_PATTERN * detected.len() as u32,
        detected_patterns: detected,
    }
}
