use crate::render::{key_state, render_catalog, render_report, render_status, render_verdict};
use ade_client::{AdeClient, AdeConfig};
use anyhow::Context;
use audit_engine::AuditEngine;
use fiscal_protocol::{ApplicantRecord, AuditReport, ExtractedDocument};
use futures_util::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Copy, Debug)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub(crate) fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_applicant(path: Option<&PathBuf>) -> anyhow::Result<Option<ApplicantRecord>> {
    path.map(|path| read_json(path)).transpose()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &AuditReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            print!("{}", render_report(report));
            Ok(())
        }
    }
}

pub(crate) fn run_analyze(
    engine: &AuditEngine,
    document: &Path,
    applicant: Option<&PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let span = tracing::info_span!("evaluation", id = %Uuid::new_v4(), file = %document.display());
    let _enter = span.enter();
    let extracted: ExtractedDocument = read_json(document)?;
    let applicant = read_applicant(applicant)?;
    let report = engine.evaluate(&extracted, applicant.as_ref());
    print_report(&report, format)
}

pub(crate) fn run_score(
    engine: &AuditEngine,
    applicant: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let record: ApplicantRecord = read_json(applicant)?;
    let verdict = engine.scorer().score(&record);
    tracing::info!(
        applicant = %record.applicant_id,
        score = verdict.score,
        tier = verdict.tier.as_str(),
        file = %applicant.display(),
        "risk verdict reported"
    );
    match format {
        OutputFormat::Json => print_json(&verdict),
        OutputFormat::Text => {
            print!("{}", render_verdict(&verdict));
            Ok(())
        }
    }
}

pub(crate) async fn run_audit(
    engine: &AuditEngine,
    extraction: AdeConfig,
    document: &Path,
    applicant: Option<&PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let applicant = read_applicant(applicant)?;
    let client = AdeClient::from_env(extraction)?;
    let extraction = match client.extract(document).await {
        Ok(extraction) => extraction,
        Err(err) => {
            tracing::warn!(status = err.status(), error = %err, "extraction failed");
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "status": err.status(),
                    "error": err.to_string(),
                }))?,
                OutputFormat::Text => println!("EXTRACTION FAILED: {}", err.status()),
            }
            return Err(err.into());
        }
    };

    if matches!(format, OutputFormat::Text) {
        println!(
            "extracted {} in {}",
            document.display(),
            humantime::format_duration(std::time::Duration::from_millis(
                extraction.processing_time.as_millis() as u64
            ))
        );
    }
    let span = tracing::info_span!("evaluation", id = %Uuid::new_v4(), file = %document.display());
    let report = span.in_scope(|| engine.evaluate(&extraction.document, applicant.as_ref()));
    print_report(&report, format)
}

pub(crate) async fn run_batch(
    engine: Arc<AuditEngine>,
    documents: Vec<PathBuf>,
    concurrency: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let total = documents.len();
    let mut results = stream::iter(documents)
        .map(|path| {
            let engine = Arc::clone(&engine);
            tokio::task::spawn_blocking(move || {
                let span =
                    tracing::info_span!("evaluation", id = %Uuid::new_v4(), file = %path.display());
                let _enter = span.enter();
                let report = read_json::<ExtractedDocument>(&path)
                    .map(|document| engine.evaluate(&document, None));
                (path, report)
            })
        })
        .buffered(concurrency.max(1));

    let mut failed = 0usize;
    let mut reports = Vec::with_capacity(total);
    while let Some(joined) = results.next().await {
        let (path, outcome) = joined.context("batch worker panicked")?;
        match outcome {
            Ok(report) => reports.push((path, report)),
            Err(err) => {
                failed += 1;
                tracing::warn!(file = %path.display(), error = %err, "document skipped");
                eprintln!("{}: {err:#}", path.display());
            }
        }
    }

    match format {
        OutputFormat::Json => {
            let items = reports
                .iter()
                .map(|(path, report)| {
                    serde_json::json!({
                        "file": path.display().to_string(),
                        "report": report,
                    })
                })
                .collect::<Vec<_>>();
            print_json(&items)?;
        }
        OutputFormat::Text => {
            for (path, report) in &reports {
                println!("== {}", path.display());
                print!("{}", render_report(report));
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} documents failed");
    }
    Ok(())
}

pub(crate) fn run_catalog(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "fraud_patterns": fiscal_protocol::PatternName::CATALOG,
            "compliance_checks": fiscal_protocol::CheckName::CATALOG,
        })),
        OutputFormat::Text => {
            print!("{}", render_catalog());
            Ok(())
        }
    }
}

pub(crate) fn run_status(extraction: AdeConfig, format: OutputFormat) -> anyhow::Result<()> {
    let client = AdeClient::from_env(extraction)?;
    let configured = client.is_configured();
    tracing::debug!(configured, "extraction key checked");
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "endpoint": client.config().endpoint,
            "model": client.config().model,
            "api_key_env": client.config().api_key_env,
            "api_key": key_state(configured),
        })),
        OutputFormat::Text => {
            print!("{}", render_status(client.config(), configured));
            Ok(())
        }
    }
}
