// src/handlers/valuation.rs
use log::info;
use serde::Serialize;
use warp::reply::Json;
use warp::Rejection;

use crate::models::{Estimates, FormData};
use crate::services::calculations::{
    average_rate, calculate_all_estimates, current_year, market_data_summary, yearly_breakdown,
    MarketSummary, YearlyBreakdown,
};
use crate::services::growth_data::{SourceRates, GROWTH_TABLE};
use crate::services::locations::{property_search_urls, suburb_report_url, PropertySearchLinks, AUCKLAND_CITIES};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValuationResponse {
    estimates: Option<Estimates>,
    summary: MarketSummary,
    breakdown: Vec<YearlyBreakdown>,
    search_links: Option<PropertySearchLinks>,
    suburb_report_url: Option<String>,
}

#[derive(Serialize)]
struct GrowthTableRow {
    year: i32,
    sources: SourceRates,
    average: f64,
}

pub async fn get_valuation(form: FormData) -> Result<Json, Rejection> {
    info!("Handling request to value property bought in {:?}", form.purchase_year);

    let year = current_year();
    let response = ValuationResponse {
        estimates: calculate_all_estimates(&form, year),
        summary: market_data_summary(form.purchase_year, year),
        breakdown: yearly_breakdown(form.purchase_year, year),
        search_links: property_search_urls(&form.city, &form.suburb),
        suburb_report_url: suburb_report_url(&form.city, &form.suburb),
    };

    Ok(warp::reply::json(&response))
}

pub async fn get_growth_table() -> Result<Json, Rejection> {
    let rows: Vec<GrowthTableRow> = GROWTH_TABLE
        .iter()
        .map(|entry| GrowthTableRow {
            year: entry.year,
            sources: entry.sources,
            average: average_rate(&entry.sources),
        })
        .collect();

    Ok(warp::reply::json(&rows))
}

pub async fn get_locations() -> Result<Json, Rejection> {
    Ok(warp::reply::json(&AUCKLAND_CITIES))
}
