use serde::{Deserialize, Deserializer, Serialize};

/// Structured applicant profile scored by the risk checks.
///
/// Every field is optional on the wire; `null` reads as absent and unknown
/// keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApplicantRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub applicant_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reported_income: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub verified_income: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_w2: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub license_expired: bool,
    #[serde(deserialize_with = "accreditation_or_unknown")]
    pub accreditation_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub business_age_years: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_prior_contracts: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id_verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub address_verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub income_documented: bool,
    #[serde(deserialize_with = "string_or_number")]
    pub zip_code: String,
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            applicant_id: String::new(),
            reported_income: 0.0,
            verified_income: 0.0,
            has_w2: false,
            license_expired: false,
            accreditation_status: "unknown".to_string(),
            business_age_years: 0.0,
            has_prior_contracts: false,
            id_verified: false,
            address_verified: false,
            income_documented: false,
            zip_code: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(u64),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn accreditation_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| ApplicantRecord::default().accreditation_status))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
