// src/bin/test_sheets.rs
use dotenv::dotenv;
use log::{error, info};

use property_valuation::config::AppConfig;
use property_valuation::models::{FormData, SubmissionPayload};
use property_valuation::services::calculations::{calculate_all_estimates, current_year};
use property_valuation::services::sheets::SheetsRelay;

/// Pushes one sample lead through the relay to check the Apps Script wiring.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let relay = SheetsRelay::new(config.sheets);
    if !relay.is_configured() {
        info!("GOOGLE_SCRIPT_URL is not set; the relay will only log the row");
    }

    let form = FormData {
        name: "Relay Test".to_string(),
        email: "relay-test@example.com".to_string(),
        phone: "021 000 0000".to_string(),
        address: "1 Test Street".to_string(),
        city: "auckland-city".to_string(),
        suburb: "Ponsonby".to_string(),
        purchase_price: Some(750000.0),
        purchase_year: Some(2020),
        improvements: Some(25000.0),
    };
    let estimates = calculate_all_estimates(&form, current_year());
    let payload = SubmissionPayload {
        form_data: form,
        estimates,
    };

    let response = relay.relay(&payload).await;
    if response.success {
        info!("✓ {}", response.message);
        Ok(())
    } else {
        error!("✗ {}", response.message);
        Err(anyhow::anyhow!(response.message))
    }
}
