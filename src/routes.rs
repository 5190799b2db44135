// src/routes.rs
use std::convert::Infallible;
use std::sync::Arc;

use log::{error, info};
use serde::de::DeserializeOwned;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge, Rejection};
use warp::{Filter, Reply};

use crate::handlers::error::ApiError;
use crate::handlers::submission::{send_to_sheets, submit};
use crate::handlers::valuation::{get_growth_table, get_locations, get_valuation};
use crate::models::RelayResponse;
use crate::services::sheets::SheetsRelay;

const MAX_BODY_BYTES: u64 = 16 * 1024;

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        code = StatusCode::BAD_REQUEST;
        message = format!("Invalid request body: {}", e);
    } else if err.find::<PayloadTooLarge>().is_some() {
        code = StatusCode::PAYLOAD_TOO_LARGE;
        message = "Request body too large".to_string();
    } else if err.find::<LengthRequired>().is_some() {
        code = StatusCode::LENGTH_REQUIRED;
        message = "Content-Length required".to_string();
    } else if err.find::<MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        error!("Unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&RelayResponse::failed(message)),
        code,
    ))
}

pub fn routes(relay: Arc<SheetsRelay>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let relay_filter = warp::any().map(move || relay.clone());

    let send_to_sheets_route = warp::path!("api" / "send-to-sheets")
        .and(warp::post())
        .and(json_body())
        .and(relay_filter.clone())
        .and_then(send_to_sheets);

    let submit_route = warp::path!("api" / "v1" / "submit")
        .and(warp::post())
        .and(json_body())
        .and(relay_filter.clone())
        .and_then(submit);

    let valuation_route = warp::path!("api" / "v1" / "valuation")
        .and(warp::post())
        .and(json_body())
        .and_then(get_valuation);

    let growth_route = warp::path!("api" / "v1" / "growth")
        .and(warp::get())
        .and_then(get_growth_table);

    let locations_route = warp::path!("api" / "v1" / "locations")
        .and(warp::get())
        .and_then(get_locations);

    info!("All routes configured successfully.");

    send_to_sheets_route
        .or(submit_route)
        .or(valuation_route)
        .or(growth_route)
        .or(locations_route)
        .recover(handle_rejection)
}
