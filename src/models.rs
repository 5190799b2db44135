// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Contact details and property facts as submitted by the valuation form.
///
/// The browser form posts every field as a string, so the numeric fields
/// accept either JSON numbers or numeric strings. Empty or unparseable
/// values read as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub suburb: String,
    #[serde(deserialize_with = "lenient_number")]
    pub purchase_price: Option<f64>,
    #[serde(deserialize_with = "lenient_year")]
    pub purchase_year: Option<i32>,
    #[serde(deserialize_with = "lenient_number")]
    pub improvements: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimates {
    pub original_price: f64,
    pub current_market_value: f64,
    pub improvements: f64,
    pub total_estimated_value: f64,
    pub capital_gain: f64,
    pub total_growth_rate: f64,
    pub annualized_rate: f64,
    pub years_held: i32,
}

/// Body of the relay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub form_data: FormData,
    #[serde(default)]
    pub estimates: Option<Estimates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        RelayResponse {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        RelayResponse {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_number(deserializer)?;
    Ok(value
        .map(f64::trunc)
        .filter(|v| *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
        .map(|v| v as i32))
}
