use serde::Deserialize;

pub const DEFAULT_KNOWN_DUPLICATES: [&str; 3] = ["APP_12345", "DUP_66789", "FRAUD_001"];
pub const DEFAULT_HIGH_RISK_ZIPS: [&str; 3] = ["60601", "75201", "10001"];

/// Lookup data for the risk scorer. Read from the `[scoring]` table of the
/// config file; missing keys fall back to the built-in sets.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    #[serde(default = "default_known_duplicates")]
    pub known_duplicates: Vec<String>,
    #[serde(default = "default_high_risk_zips")]
    pub high_risk_zips: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            known_duplicates: default_known_duplicates(),
            high_risk_zips: default_high_risk_zips(),
        }
    }
}

fn default_known_duplicates() -> Vec<String> {
    DEFAULT_KNOWN_DUPLICATES.iter().map(|id| id.to_string()).collect()
}

fn default_high_risk_zips() -> Vec<String> {
    DEFAULT_HIGH_RISK_ZIPS.iter().map(|zip| zip.to_string()).collect()
}
