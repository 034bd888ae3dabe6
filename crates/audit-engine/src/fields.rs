use fiscal_protocol::{FieldReport, FieldTag};
use regex::Regex;
use std::sync::OnceLock;

struct FieldPatterns {
    financial_data: Regex,
    tags: [(FieldTag, Regex); 4],
}

impl FieldPatterns {
    fn compile() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("valid field pattern");
        Self {
            financial_data: compile(r"\$?\d+[,.]?\d*"),
            tags: [
                (FieldTag::FinancialAmounts, compile(r"\$?\d{4,}")),
                (FieldTag::SsnPattern, compile(r"\b\d{3}-\d{2}-\d{4}\b")),
                (FieldTag::BusinessName, compile(r"\b[A-Z]{2,}\b")),
                (FieldTag::ZipCode, compile(r"\b\d{5}\b")),
            ],
        }
    }
}

fn patterns() -> &'static FieldPatterns {
    static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();
    PATTERNS.get_or_init(FieldPatterns::compile)
}

/// Derive coarse structural signals from extracted text.
pub fn extract_fields(raw_text: &str) -> FieldReport {
    let patterns = patterns();
    let fields_extracted = patterns
        .tags
        .iter()
        .filter(|(_, regex)| regex.is_match(raw_text))
        .map(|(tag, _)| *tag)
        .collect::<Vec<_>>();

    let report = FieldReport {
        fields_extracted,
        word_count: raw_text.split_whitespace().count(),
        char_count: raw_text.chars().count(),
        has_financial_data: patterns.financial_data.is_match(raw_text),
    };
    tracing::debug!(
        fields = report.fields_extracted.len(),
        words = report.word_count,
        financial = report.has_financial_data,
        "fields extracted"
    );
    report
}
