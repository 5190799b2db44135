// src/handlers/submission.rs
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{with_status, Json};
use warp::Rejection;

use super::error::ApiError;
use crate::models::{Estimates, FormData, SubmissionPayload};
use crate::services::calculations::{calculate_all_estimates, confirmation_message, current_year};
use crate::services::sheets::SheetsRelay;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    success: bool,
    estimates: Estimates,
    message: String,
}

/// Relays a client-computed estimate to the leads sheet.
pub async fn send_to_sheets(
    payload: SubmissionPayload,
    relay: Arc<SheetsRelay>,
) -> Result<impl warp::Reply, Rejection> {
    info!("Received submission from {:?}", payload.form_data.email);

    let response = relay.relay(&payload).await;
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok(with_status(warp::reply::json(&response), status))
}

/// Values the property server-side, relays it and returns the confirmation text.
/// A relay failure still returns the valuation, with a softer message.
pub async fn submit(form: FormData, relay: Arc<SheetsRelay>) -> Result<Json, Rejection> {
    info!("Handling valuation submission from {:?}", form.email);

    let estimates = calculate_all_estimates(&form, current_year()).ok_or_else(|| {
        warn!("Submission without a usable purchase price");
        warp::reject::custom(ApiError::bad_request("A positive purchase price is required"))
    })?;

    let payload = SubmissionPayload {
        form_data: form,
        estimates: Some(estimates),
    };
    let outcome = relay.relay(&payload).await;
    if !outcome.success {
        warn!("Submission not recorded: {}", outcome.message);
    }

    let message = confirmation_message(
        &payload.form_data.name,
        estimates.total_estimated_value,
        outcome.success,
    );

    Ok(warp::reply::json(&SubmitResponse {
        success: outcome.success,
        estimates,
        message,
    }))
}
