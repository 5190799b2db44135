// src/services/sheets.rs

use anyhow::{anyhow, bail, Result};
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::{Estimates, FormData, RelayResponse, SubmissionPayload};
use crate::services::calculations::format_percent;

#[derive(Clone, Debug, Default)]
pub struct SheetsConfig {
    /// Apps Script web app that appends rows to the leads sheet.
    /// `None` switches the relay to log-only mode.
    pub script_url: Option<String>,
}

/// One row as the spreadsheet script expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub suburb: String,
    pub purchase_price: Option<f64>,
    pub purchase_year: Option<i32>,
    pub improvements: f64,
    pub current_market_value: i64,
    pub total_estimated_value: i64,
    pub capital_gain: i64,
    pub total_growth_percent: String,
    pub annual_growth_percent: String,
    pub years_held: i32,
}

#[derive(Debug, Deserialize)]
struct ScriptReply {
    #[serde(default)]
    success: bool,
    error: Option<String>,
}

/// Rounds to whole dollars, halves going up.
fn round_dollars(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl SheetRow {
    pub fn new(form: &FormData, estimates: &Estimates) -> Self {
        SheetRow {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            suburb: form.suburb.clone(),
            purchase_price: form.purchase_price,
            purchase_year: form.purchase_year,
            improvements: form.improvements.unwrap_or(0.0),
            current_market_value: round_dollars(estimates.current_market_value),
            total_estimated_value: round_dollars(estimates.total_estimated_value),
            capital_gain: round_dollars(estimates.capital_gain),
            total_growth_percent: format_percent(estimates.total_growth_rate),
            annual_growth_percent: format_percent(estimates.annualized_rate),
            years_held: estimates.years_held,
        }
    }

    pub fn from_submission(payload: &SubmissionPayload) -> Result<Self> {
        let estimates = payload
            .estimates
            .as_ref()
            .ok_or_else(|| anyhow!("Submission has no estimates"))?;
        Ok(SheetRow::new(&payload.form_data, estimates))
    }
}

pub struct SheetsRelay {
    pub config: SheetsConfig,
    client: Client,
}

impl SheetsRelay {
    pub fn new(config: SheetsConfig) -> Self {
        SheetsRelay {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.script_url.is_some()
    }

    /// Forwards a submission and reports the outcome. Never fails: every
    /// error is folded into a `success: false` response.
    pub async fn relay(&self, payload: &SubmissionPayload) -> RelayResponse {
        match self.try_relay(payload).await {
            Ok(message) => RelayResponse::ok(message),
            Err(e) => {
                error!("Error sending to Google Sheets: {:#}", e);
                RelayResponse::failed(format!("Failed to update Google Sheets: {:#}", e))
            }
        }
    }

    async fn try_relay(&self, payload: &SubmissionPayload) -> Result<String> {
        let row = SheetRow::from_submission(payload)?;

        let Some(url) = self.config.script_url.as_deref() else {
            info!("Google Script URL not configured, logging data:");
            info!("SHEET DATA: {:?}", row);
            return Ok("Data logged to console (Google Sheets not configured)".to_string());
        };

        info!("Sending to Google Sheets: {:?}", row);
        self.append_row(url, &row).await?;
        Ok("Data successfully added to Google Sheets".to_string())
    }

    async fn append_row(&self, url: &str, row: &SheetRow) -> Result<()> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(row)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!("Google Sheets response status: {}", status);

        if !status.is_success() {
            bail!("Google Sheets API error: {} - {}", status.as_u16(), body);
        }

        let reply: ScriptReply = serde_json::from_str(&body)
            .map_err(|_| anyhow!("Invalid JSON response from Google Sheets: {}", body))?;

        if reply.success {
            Ok(())
        } else {
            Err(anyhow!(reply
                .error
                .unwrap_or_else(|| "Unknown error from Google Sheets".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimates() -> Estimates {
        Estimates {
            original_price: 750000.0,
            current_market_value: 808123.5,
            improvements: 20000.0,
            total_estimated_value: 828123.5,
            capital_gain: 58123.5,
            total_growth_rate: 0.077498,
            annualized_rate: 0.012513,
            years_held: 6,
        }
    }

    #[test]
    fn row_rounds_money_and_formats_percentages() {
        let form = FormData {
            name: "Aroha".to_string(),
            suburb: "Ponsonby".to_string(),
            purchase_price: Some(750000.0),
            purchase_year: Some(2020),
            improvements: Some(20000.0),
            ..FormData::default()
        };
        let row = SheetRow::new(&form, &estimates());

        assert_eq!(row.current_market_value, 808124);
        assert_eq!(row.total_estimated_value, 828124);
        assert_eq!(row.capital_gain, 58124);
        assert_eq!(row.total_growth_percent, "7.7");
        assert_eq!(row.annual_growth_percent, "1.3");
        assert_eq!(row.years_held, 6);
        assert_eq!(row.purchase_year, Some(2020));
    }

    #[test]
    fn missing_improvements_default_to_zero() {
        let row = SheetRow::new(&FormData::default(), &estimates());
        assert_eq!(row.improvements, 0.0);
        assert_eq!(row.purchase_price, None);
    }

    #[test]
    fn negative_half_rounds_up() {
        assert_eq!(round_dollars(-10.5), -10);
        assert_eq!(round_dollars(10.5), 11);
    }

    #[test]
    fn row_serializes_in_camel_case() {
        let value = serde_json::to_value(SheetRow::new(&FormData::default(), &estimates())).unwrap();
        assert_eq!(value["totalEstimatedValue"], 828124);
        assert_eq!(value["annualGrowthPercent"], "1.3");
        assert!(value["purchasePrice"].is_null());
    }

    #[tokio::test]
    async fn submission_without_estimates_fails() {
        let relay = SheetsRelay::new(SheetsConfig::default());
        let payload = SubmissionPayload {
            form_data: FormData::default(),
            estimates: None,
        };
        let response = relay.relay(&payload).await;
        assert!(!response.success);
        assert!(response.message.starts_with("Failed to update Google Sheets"));
    }

    #[tokio::test]
    async fn unconfigured_relay_only_logs() {
        let relay = SheetsRelay::new(SheetsConfig::default());
        assert!(!relay.is_configured());
        let payload = SubmissionPayload {
            form_data: FormData::default(),
            estimates: Some(estimates()),
        };
        let response = relay.relay(&payload).await;
        assert_eq!(
            response,
            RelayResponse::ok("Data logged to console (Google Sheets not configured)")
        );
    }
}
