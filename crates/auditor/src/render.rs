use fiscal_protocol::{
    AuditReport, CheckName, ComplianceReport, ExtractionSummary, FieldReport, FraudReport,
    PatternName, RiskTier, RiskVerdict,
};
use ade_client::AdeConfig;
use std::fmt::Write;

pub(crate) fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();
    render_document(&mut out, &report.document);
    render_fields(&mut out, &report.fields);
    render_fraud(&mut out, &report.fraud);
    render_compliance(&mut out, &report.compliance);
    if let Some(verdict) = &report.verdict {
        out.push_str(&render_verdict(verdict));
    }
    out
}

fn render_document(out: &mut String, summary: &ExtractionSummary) {
    let _ = writeln!(out, "DOCUMENT");
    let _ = writeln!(out, "  credits used:      {}", summary.credits_used);
    let _ = writeln!(
        out,
        "  content extracted: {} chars",
        group_thousands(summary.content_length)
    );
    let _ = writeln!(out, "  data chunks:       {}", summary.chunk_count);
}

fn render_fields(out: &mut String, fields: &FieldReport) {
    let tags = if fields.fields_extracted.is_empty() {
        "none".to_string()
    } else {
        fields
            .fields_extracted
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "FIELDS");
    let _ = writeln!(out, "  extracted:      {tags}");
    let _ = writeln!(
        out,
        "  words/chars:    {}/{}",
        group_thousands(fields.word_count),
        group_thousands(fields.char_count)
    );
    let _ = writeln!(
        out,
        "  financial data: {}",
        if fields.has_financial_data { "yes" } else { "no" }
    );
}

fn render_fraud(out: &mut String, fraud: &FraudReport) {
    let _ = writeln!(out, "FRAUD PATTERNS");
    for pattern in &fraud.patterns_checked {
        let mark = if fraud.detected_patterns.contains(pattern) {
            "x"
        } else {
            " "
        };
        let _ = writeln!(out, "  [{mark}] {}", pattern.label());
    }
    let _ = writeln!(out, "  risk factors: {}", fraud.risk_factors);
}

fn render_compliance(out: &mut String, compliance: &ComplianceReport) {
    let _ = writeln!(out, "COMPLIANCE");
    for check in &compliance.checks_defined {
        let mark = if compliance.passed_checks.contains(check) {
            "x"
        } else {
            " "
        };
        match check.evidence_label() {
            Some(evidence) => {
                let _ = writeln!(out, "  [{mark}] {} ({evidence})", check.label());
            }
            None => {
                let _ = writeln!(out, "  [{mark}] {} (not evaluated)", check.label());
            }
        }
    }
    let _ = writeln!(out, "  compliance score: {}", compliance.compliance_score);
}

pub(crate) fn render_verdict(verdict: &RiskVerdict) -> String {
    let mut out = String::new();
    let headline = match verdict.tier {
        RiskTier::HighRisk => "HIGH RISK DETECTED",
        RiskTier::MediumRisk => "MEDIUM RISK",
        RiskTier::LowRisk => "LOW RISK",
    };
    let _ = writeln!(out, "RISK ASSESSMENT");
    let _ = writeln!(out, "  {headline}: {}/100", verdict.score);
    for check in &verdict.triggered_checks {
        let _ = writeln!(
            out,
            "  - {} (+{})",
            check.label(),
            audit_engine::risk::weight(*check)
        );
    }
    out
}

pub(crate) fn render_catalog() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "FRAUD PATTERNS");
    for pattern in PatternName::CATALOG {
        let _ = writeln!(out, "  {:<24} {}", pattern_key(pattern), pattern.label());
    }
    let _ = writeln!(out, "COMPLIANCE CHECKS");
    for check in CheckName::CATALOG {
        let evidence = check.evidence_label().unwrap_or("never evaluated");
        let _ = writeln!(out, "  {:<27} {} ({evidence})", check_key(check), check.label());
    }
    out
}

pub(crate) fn key_state(configured: bool) -> &'static str {
    if configured {
        "LIVE"
    } else {
        "NEEDS KEY"
    }
}

pub(crate) fn render_status(config: &AdeConfig, configured: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SYSTEM STATUS");
    let _ = writeln!(out, "  endpoint: {}", config.endpoint);
    let _ = writeln!(out, "  model:    {}", config.model);
    let _ = writeln!(
        out,
        "  ADE key ({}): {}",
        config.api_key_env,
        key_state(configured)
    );
    out
}

fn pattern_key(pattern: PatternName) -> String {
    serde_json::to_value(pattern)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn check_key(check: CheckName) -> String {
    serde_json::to_value(check)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
