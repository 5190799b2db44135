// tests/relay.rs
mod common;

use warp::http::StatusCode;

use common::{sample_payload, spawn_webhook};
use property_valuation::services::sheets::{SheetsConfig, SheetsRelay};

fn relay_to(url: &str) -> SheetsRelay {
    SheetsRelay::new(SheetsConfig {
        script_url: Some(url.to_string()),
    })
}

#[tokio::test]
async fn forwards_row_and_reports_success() {
    let (url, received) = spawn_webhook(StatusCode::OK, r#"{"success":true}"#);

    let response = relay_to(&url).relay(&sample_payload()).await;

    assert!(response.success);
    assert_eq!(response.message, "Data successfully added to Google Sheets");

    let rows = received.lock().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["name"], "Aroha Smith");
    assert_eq!(row["suburb"], "Ponsonby");
    assert_eq!(row["purchasePrice"], 750000.0);
    assert_eq!(row["purchaseYear"], 2020);
    assert_eq!(row["improvements"], 25000.0);
    assert_eq!(row["currentMarketValue"], 808124);
    assert_eq!(row["totalEstimatedValue"], 833124);
    assert_eq!(row["capitalGain"], 58124);
    assert_eq!(row["totalGrowthPercent"], "7.7");
    assert_eq!(row["annualGrowthPercent"], "1.3");
    assert_eq!(row["yearsHeld"], 6);
}

#[tokio::test]
async fn server_error_reports_status_code() {
    let (url, _) = spawn_webhook(StatusCode::INTERNAL_SERVER_ERROR, "script crashed");

    let response = relay_to(&url).relay(&sample_payload()).await;

    assert!(!response.success);
    assert!(response.message.contains("500"), "{}", response.message);
    assert!(response.message.contains("script crashed"));
    assert!(response.message.starts_with("Failed to update Google Sheets:"));
}

#[tokio::test]
async fn non_json_reply_is_a_failure() {
    let (url, _) = spawn_webhook(StatusCode::OK, "<html>Sign in</html>");

    let response = relay_to(&url).relay(&sample_payload()).await;

    assert!(!response.success);
    assert!(response
        .message
        .contains("Invalid JSON response from Google Sheets: <html>Sign in</html>"));
}

#[tokio::test]
async fn script_error_text_is_passed_through() {
    let (url, _) = spawn_webhook(StatusCode::OK, r#"{"success":false,"error":"Sheet is locked"}"#);

    let response = relay_to(&url).relay(&sample_payload()).await;

    assert!(!response.success);
    assert_eq!(response.message, "Failed to update Google Sheets: Sheet is locked");
}

#[tokio::test]
async fn script_failure_without_error_text() {
    let (url, _) = spawn_webhook(StatusCode::OK, r#"{"success":false}"#);

    let response = relay_to(&url).relay(&sample_payload()).await;

    assert!(!response.success);
    assert!(response.message.ends_with("Unknown error from Google Sheets"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_failure() {
    let response = relay_to("http://127.0.0.1:1/exec").relay(&sample_payload()).await;

    assert!(!response.success);
    assert!(response.message.starts_with("Failed to update Google Sheets:"));
}

#[tokio::test]
async fn log_only_mode_succeeds_without_a_webhook() {
    let relay = SheetsRelay::new(SheetsConfig::default());

    let response = relay.relay(&sample_payload()).await;

    assert!(response.success);
    assert_eq!(
        response.message,
        "Data logged to console (Google Sheets not configured)"
    );
}
