mod cli;
mod commands;
mod config;
mod logging;
mod render;

use crate::cli::{Args, Command};
use crate::commands::OutputFormat;
use crate::config::resolve_config;
use crate::logging::init_tracing;
use audit_engine::AuditEngine;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _file_guard = init_tracing(args.audit_dir.as_deref(), args.log_to_stderr)?;

    let config = resolve_config(args.config.as_ref())?;
    let engine = Arc::new(AuditEngine::new(&config.scoring));
    let format = OutputFormat::from_flag(args.json);

    match args.command {
        Command::Analyze {
            document,
            applicant,
        } => commands::run_analyze(&engine, &document, applicant.as_ref(), format),
        Command::Score { applicant } => commands::run_score(&engine, &applicant, format),
        Command::Audit {
            document,
            applicant,
        } => {
            commands::run_audit(
                &engine,
                config.extraction,
                &document,
                applicant.as_ref(),
                format,
            )
            .await
        }
        Command::Batch {
            documents,
            concurrency,
        } => {
            let concurrency = concurrency.unwrap_or(config.batch.concurrency);
            commands::run_batch(Arc::clone(&engine), documents, concurrency, format).await
        }
        Command::Catalog => commands::run_catalog(format),
        Command::Status => commands::run_status(config.extraction, format),
    }
}
