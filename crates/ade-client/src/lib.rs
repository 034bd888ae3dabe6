//! Client for the LandingAI ADE document-extraction service.

mod error;

pub use error::ExtractionError;

use fiscal_protocol::ExtractedDocument;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};

pub const DEFAULT_ENDPOINT: &str = "https://api.va.landing.ai/v1/ade/parse";
pub const DEFAULT_MODEL: &str = "dpt-2-latest";
pub const DEFAULT_API_KEY_ENV: &str = "LANDINGAI_API_KEY";
const PLACEHOLDER_API_KEY: &str = "your_key_here";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AdeConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for AdeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// A successful extraction plus the service-side bookkeeping.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub document: ExtractedDocument,
    pub processing_time: Duration,
}

pub struct AdeClient {
    config: AdeConfig,
    api_key: Option<String>,
    http_client: Client,
}

impl AdeClient {
    /// Build a client whose key comes from the configured environment
    /// variable, after loading `.env` if one exists.
    pub fn from_env(config: AdeConfig) -> Result<Self, ExtractionError> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var(&config.api_key_env).ok();
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: AdeConfig,
        api_key: Option<String>,
    ) -> Result<Self, ExtractionError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ExtractionError::Transport(err.to_string()))?;
        Ok(Self::from_parts(config, api_key, http_client))
    }

    fn from_parts(config: AdeConfig, api_key: Option<String>, http_client: Client) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);
        Self {
            config,
            api_key,
            http_client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn config(&self) -> &AdeConfig {
        &self.config
    }

    pub async fn extract(&self, path: &Path) -> Result<Extraction, ExtractionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ExtractionError::ApiKeyRequired)?;

        let bytes = tokio::fs::read(path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ExtractionError::FileNotFound(path.to_path_buf())
            } else {
                ExtractionError::Transport(format!("could not read {}: {err}", path.display()))
            }
        })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document")
            .to_string();
        let form = Form::new()
            .part("document", Part::bytes(bytes).file_name(file_name))
            .text("model", self.config.model.clone());

        tracing::info!(
            endpoint = %self.config.endpoint,
            file = %path.display(),
            "sending document for extraction"
        );
        let started = Instant::now();
        let response = self
            .http_client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                if err.is_connect() || err.is_timeout() {
                    ExtractionError::Transport(format!(
                        "extraction service unreachable: {err}"
                    ))
                } else {
                    ExtractionError::Transport(err.to_string())
                }
            })?;

        // Only a plain 200 carries a parse result; 202 and friends are job receipts.
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let payload: Value = response
            .json()
            .await
            .map_err(|err| ExtractionError::Transport(format!("invalid JSON: {err}")))?;
        let processing_time = started.elapsed();

        let document = parse_response(&payload);
        tracing::info!(
            chunks = document.chunk_count,
            credits = document.credits_used,
            elapsed_ms = processing_time.as_millis() as u64,
            "extraction succeeded"
        );
        Ok(Extraction {
            document,
            processing_time,
        })
    }
}

/// Reduce an ADE parse response to the fields the audit consumes.
pub fn parse_response(payload: &Value) -> ExtractedDocument {
    let raw_text = payload
        .get("markdown")
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .to_string();
    let chunk_count = payload
        .get("chunks")
        .and_then(|value| value.as_array())
        .map(|chunks| chunks.len() as u32)
        .unwrap_or(0);
    let credits_used = payload
        .get("metadata")
        .and_then(|metadata| metadata.get("credit_usage"))
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    ExtractedDocument {
        raw_text,
        chunk_count,
        credits_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::path::PathBuf;

    fn read_request(stream: &mut TcpStream) {
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        let mut expected: Option<usize> = None;
        loop {
            if let Some(total) = expected {
                if request.len() >= total {
                    return;
                }
            } else if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&request[..end]).to_ascii_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok());
                match body_len {
                    Some(len) => {
                        expected = Some(end + 4 + len);
                        continue;
                    }
                    None if request.ends_with(b"0\r\n\r\n") => return,
                    None => {}
                }
            }
            let read = stream.read(&mut chunk).expect("read request");
            if read == 0 {
                return;
            }
            request.extend_from_slice(&chunk[..read]);
        }
    }

    /// Answer one request with a canned response; returns the endpoint URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
        });
        format!("http://{addr}/v1/ade/parse")
    }

    fn local_client(endpoint: String) -> AdeClient {
        let config = AdeConfig {
            endpoint,
            ..AdeConfig::default()
        };
        let http_client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("http client");
        AdeClient::from_parts(config, Some("secret".to_string()), http_client)
    }

    fn sample_document(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ade-client-{}-{name}.txt", std::process::id()));
        std::fs::write(&path, "Applicant income $52,000").expect("write sample");
        path
    }

    fn run_extract(client: &AdeClient, path: &Path) -> Result<Extraction, ExtractionError> {
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        rt.block_on(client.extract(path))
    }

    #[test]
    fn parses_markdown_chunks_and_credits() {
        let payload = json!({
            "markdown": "# Grant Form\nApplicant: ACME",
            "chunks": [{"id": 1}, {"id": 2}, {"id": 3}],
            "metadata": {"credit_usage": 2.5, "page_count": 1}
        });
        let document = parse_response(&payload);
        assert_eq!(document.raw_text, "# Grant Form\nApplicant: ACME");
        assert_eq!(document.chunk_count, 3);
        assert_eq!(document.credits_used, 2.5);
    }

    #[test]
    fn missing_response_fields_default_to_empty() {
        let document = parse_response(&json!({}));
        assert_eq!(document, ExtractedDocument::default());
    }

    #[test]
    fn placeholder_key_counts_as_missing() {
        let client = AdeClient::with_api_key(
            AdeConfig::default(),
            Some(PLACEHOLDER_API_KEY.to_string()),
        )
        .expect("client");
        assert!(!client.is_configured());
        let client = AdeClient::with_api_key(AdeConfig::default(), Some("  ".to_string()))
            .expect("client");
        assert!(!client.is_configured());
    }

    #[test]
    fn extract_without_key_fails_before_any_io() {
        let client = AdeClient::with_api_key(AdeConfig::default(), None).expect("client");
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        let err = rt
            .block_on(client.extract(Path::new("/definitely/missing.pdf")))
            .expect_err("missing key");
        assert_eq!(err, ExtractionError::ApiKeyRequired);
        assert_eq!(err.status(), "api_key_required");
    }

    #[test]
    fn extract_reports_missing_file() {
        let client = AdeClient::with_api_key(AdeConfig::default(), Some("secret".to_string()))
            .expect("client");
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        let err = rt
            .block_on(client.extract(Path::new("/definitely/missing.pdf")))
            .expect_err("missing file");
        assert!(matches!(err, ExtractionError::FileNotFound(_)));
        assert_eq!(err.status(), "file_not_found");
    }

    #[test]
    fn config_defaults_match_service() {
        let config: AdeConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, AdeConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn ok_response_is_parsed() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"markdown":"Total due $1,200","chunks":[{},{}],"metadata":{"credit_usage":3.0}}"#,
        );
        let path = sample_document("ok");
        let extraction = run_extract(&local_client(endpoint), &path).expect("extraction");
        assert_eq!(extraction.document.raw_text, "Total due $1,200");
        assert_eq!(extraction.document.chunk_count, 2);
        assert_eq!(extraction.document.credits_used, 3.0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn accepted_status_is_an_api_error() {
        let endpoint = serve_once("202 Accepted", r#"{"job_id":"abc"}"#);
        let path = sample_document("accepted");
        let err = run_extract(&local_client(endpoint), &path).expect_err("202 is not a result");
        assert!(matches!(err, ExtractionError::Api { status: 202, .. }));
        assert_eq!(err.status(), "api_error");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn server_error_keeps_status_and_body() {
        let endpoint = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let path = sample_document("server-error");
        let err = run_extract(&local_client(endpoint), &path).expect_err("500");
        assert_eq!(
            err,
            ExtractionError::Api {
                status: 500,
                body: r#"{"error":"boom"}"#.to_string(),
            }
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn invalid_json_is_a_transport_error() {
        let endpoint = serve_once("200 OK", "not json");
        let path = sample_document("bad-json");
        let err = run_extract(&local_client(endpoint), &path).expect_err("bad json");
        assert!(matches!(err, ExtractionError::Transport(_)));
        let _ = std::fs::remove_file(path);
    }
}
