use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    ApiKeyRequired,
    FileNotFound(PathBuf),
    Api { status: u16, body: String },
    Transport(String),
}

impl ExtractionError {
    /// Short machine-readable status, as reported to operators.
    pub fn status(&self) -> &'static str {
        match self {
            ExtractionError::ApiKeyRequired => "api_key_required",
            ExtractionError::FileNotFound(_) => "file_not_found",
            ExtractionError::Api { .. } => "api_error",
            ExtractionError::Transport(_) => "error",
        }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::ApiKeyRequired => {
                write!(f, "extraction API key is not configured")
            }
            ExtractionError::FileNotFound(path) => {
                write!(f, "document not found: {}", path.display())
            }
            ExtractionError::Api { status, body } => {
                if body.is_empty() {
                    write!(f, "extraction failed ({status}): invalid key or endpoint?")
                } else {
                    write!(f, "extraction failed ({status}): {body}")
                }
            }
            ExtractionError::Transport(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ExtractionError {}
