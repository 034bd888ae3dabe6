use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fiscal",
    version,
    about = "Fraud and compliance audit for extracted government documents"
)]
pub(crate) struct Args {
    #[arg(long, global = true, help = "Config file (defaults to config/fiscal.toml if present)")]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub(crate) json: bool,
    #[arg(long, global = true, help = "Write a daily-rolling JSON audit log here")]
    pub(crate) audit_dir: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze an extracted document (JSON with raw_text, chunk_count, credits_used).
    Analyze {
        document: PathBuf,
        #[arg(long)]
        applicant: Option<PathBuf>,
    },
    /// Score an applicant record (JSON object).
    Score { applicant: PathBuf },
    /// Send a document to the extraction service, then analyze the result.
    Audit {
        document: PathBuf,
        #[arg(long)]
        applicant: Option<PathBuf>,
    },
    /// Analyze many extracted documents concurrently.
    Batch {
        #[arg(required = true)]
        documents: Vec<PathBuf>,
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// List the fraud pattern and compliance catalogs.
    Catalog,
    /// Show the extraction service setup and whether an API key is usable.
    Status,
}
