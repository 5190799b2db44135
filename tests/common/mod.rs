// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;

use property_valuation::models::{Estimates, FormData, SubmissionPayload};

/// Rows received by a fake Apps Script endpoint.
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Starts an in-process stand-in for the spreadsheet webhook that answers
/// every POST with `status` and `body`. Returns its URL and the rows it saw.
pub fn spawn_webhook(status: StatusCode, body: &'static str) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();

    let route = warp::post()
        .and(warp::path("exec"))
        .and(warp::body::json())
        .map(move |row: Value| {
            sink.lock().unwrap().push(row);
            warp::reply::with_status(body, status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (format!("http://{}/exec", addr), received)
}

pub fn sample_form() -> FormData {
    serde_json::from_value(sample_form_json()).unwrap()
}

pub fn sample_form_json() -> Value {
    json!({
        "name": "Aroha Smith",
        "email": "aroha@example.com",
        "phone": "021 555 0101",
        "address": "12 Ponsonby Road",
        "city": "auckland-city",
        "suburb": "Ponsonby",
        "purchasePrice": "750000",
        "purchaseYear": "2020",
        "improvements": "25000"
    })
}

pub fn sample_estimates() -> Estimates {
    Estimates {
        original_price: 750000.0,
        current_market_value: 808123.5,
        improvements: 25000.0,
        total_estimated_value: 833123.5,
        capital_gain: 58123.5,
        total_growth_rate: 0.077498,
        annualized_rate: 0.012513,
        years_held: 6,
    }
}

pub fn sample_payload() -> SubmissionPayload {
    SubmissionPayload {
        form_data: sample_form(),
        estimates: Some(sample_estimates()),
    }
}
