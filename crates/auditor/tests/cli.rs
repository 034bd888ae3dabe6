use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("fiscal").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn score_reference_applicant_is_high_risk() {
    cmd()
        .args(["score", &fixture("reference_applicant.json")])
        .assert()
        .success()
        .stdout(contains("HIGH RISK DETECTED: 100/100"))
        .stdout(contains("- Duplicate application (+25)"));
}

#[test]
fn score_empty_applicant_json() {
    cmd()
        .args(["--json", "score", &fixture("empty_applicant.json")])
        .assert()
        .success()
        .stdout(contains("\"score\": 45"))
        .stdout(contains("\"MEDIUM_RISK\""));
}

#[test]
fn score_established_applicant_is_low_risk() {
    cmd()
        .args(["score", &fixture("established_applicant.json")])
        .assert()
        .success()
        .stdout(contains("LOW RISK: 0/100"));
}

#[test]
fn config_overrides_lookup_sets() {
    cmd()
        .args([
            "--config",
            &fixture("strict_lookup.toml"),
            "score",
            &fixture("established_applicant.json"),
        ])
        .assert()
        .success()
        .stdout(contains("LOW RISK: 35/100"))
        .stdout(contains("Geographic pattern"));
}

#[test]
fn analyze_grant_application() {
    cmd()
        .args(["analyze", &fixture("grant_application.json")])
        .assert()
        .success()
        .stdout(contains("[x] Duplicate Applications"))
        .stdout(contains("[x] Suspicious Amounts"))
        .stdout(contains("[ ] Credential Fraud"))
        .stdout(contains("risk factors: 60"))
        .stdout(contains("compliance score: 50"))
        .stdout(contains("RISK ASSESSMENT").not());
}

#[test]
fn analyze_with_applicant_includes_verdict() {
    cmd()
        .args([
            "--json",
            "analyze",
            &fixture("grant_application.json"),
            "--applicant",
            &fixture("reference_applicant.json"),
        ])
        .assert()
        .success()
        .stdout(contains("\"HIGH_RISK\""))
        .stdout(contains("\"chunk_count\": 6"));
}

#[test]
fn analyze_blank_document_reports_no_signal() {
    cmd()
        .args(["--json", "analyze", &fixture("blank_document.json")])
        .assert()
        .success()
        .stdout(contains("\"detected_patterns\": []"))
        .stdout(contains("\"risk_factors\": 0"));
}

#[test]
fn analyze_rejects_malformed_input() {
    cmd()
        .args(["analyze", &fixture("malformed.json")])
        .assert()
        .failure()
        .stderr(contains("failed to parse"));
}

#[test]
fn batch_reports_each_document_and_failures() {
    cmd()
        .args([
            "batch",
            &fixture("grant_application.json"),
            &fixture("blank_document.json"),
            &fixture("malformed.json"),
            "--concurrency",
            "2",
        ])
        .assert()
        .failure()
        .stdout(contains("grant_application.json"))
        .stdout(contains("blank_document.json"))
        .stderr(contains("1 of 3 documents failed"));
}

#[test]
fn catalog_lists_always_absent_entries() {
    cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(contains("DECEASED_BENEFICIARIES"))
        .stdout(contains("ELIGIBILITY_REQUIREMENTS"));
}

#[test]
fn audit_without_api_key_does_not_run_the_pipeline() {
    cmd()
        .env_remove("LANDINGAI_API_KEY")
        .args(["audit", &fixture("grant_application.json")])
        .assert()
        .failure()
        .stdout(contains("EXTRACTION FAILED: api_key_required"))
        .stdout(contains("FRAUD PATTERNS").not());
}

#[test]
fn status_reports_missing_key() {
    cmd()
        .env_remove("LANDINGAI_API_KEY")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("ADE key (LANDINGAI_API_KEY): NEEDS KEY"));
}

#[test]
fn status_treats_placeholder_key_as_missing() {
    cmd()
        .env("LANDINGAI_API_KEY", "your_key_here")
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""api_key": "NEEDS KEY""#));
}

#[test]
fn status_reports_live_key() {
    cmd()
        .env("LANDINGAI_API_KEY", "sk-test")
        .arg("status")
        .assert()
        .success()
        .stdout(contains("NEEDS KEY").not())
        .stdout(contains(": LIVE"));
}
