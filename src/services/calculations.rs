// src/services/calculations.rs
use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use log::debug;
use serde::Serialize;

use crate::models::{Estimates, FormData};
use crate::services::growth_data::{growth_for_year, SourceRates, FIRST_YEAR, GROWTH_TABLE, LAST_YEAR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthResult {
    pub total_growth_rate: f64,
    pub years_held: i32,
    pub annualized_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub avg_annual_growth: String,
    pub total_growth: String,
    pub years_held: String,
    pub data_points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdown {
    pub year: i32,
    pub growth_rate: f64,
    pub sources: Vec<&'static str>,
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn annualized_rate(multiplier: f64, years: i32) -> f64 {
    if years <= 0 {
        0.0
    } else {
        multiplier.powf(1.0 / years as f64) - 1.0
    }
}

pub fn average_rate(sources: &SourceRates) -> f64 {
    calculate_average(&sources.values())
}

/// Mean of the five source rates for every year in the table.
pub fn average_growth_by_year() -> BTreeMap<i32, f64> {
    GROWTH_TABLE
        .iter()
        .map(|entry| (entry.year, average_rate(&entry.sources)))
        .collect()
}

fn valid_purchase_year(purchase_year: Option<i32>, current_year: i32) -> Option<i32> {
    purchase_year.filter(|year| *year >= FIRST_YEAR && *year <= current_year)
}

/// Years whose growth is applied for a purchase in `purchase_year`.
/// Nothing is projected past the last year of the table.
fn compounding_years(purchase_year: i32, current_year: i32) -> std::ops::RangeInclusive<i32> {
    purchase_year.saturating_add(1)..=current_year.min(LAST_YEAR)
}

/// Compounds the averaged yearly growth from the year after purchase up to
/// the current year. Out-of-range or missing purchase years yield zeros.
pub fn calculate_with_yearly_growth(purchase_year: Option<i32>, current_year: i32) -> GrowthResult {
    let Some(purchase_year) = valid_purchase_year(purchase_year, current_year) else {
        return GrowthResult::default();
    };

    let multiplier = compounding_years(purchase_year, current_year).fold(1.0, |acc, year| {
        // Years absent from the table count as flat.
        let rate = growth_for_year(year)
            .map(|entry| average_rate(&entry.sources))
            .unwrap_or(0.0);
        acc * (1.0 + rate)
    });

    let years_held = current_year - purchase_year;
    let result = GrowthResult {
        total_growth_rate: multiplier - 1.0,
        years_held,
        annualized_rate: annualized_rate(multiplier, years_held),
    };
    debug!("Growth since {}: {:?}", purchase_year, result);
    result
}

pub fn calculate_all_estimates(form: &FormData, current_year: i32) -> Option<Estimates> {
    let original_price = form.purchase_price.filter(|p| p.is_finite() && *p > 0.0)?;
    let improvements = form
        .improvements
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0);

    let growth = calculate_with_yearly_growth(form.purchase_year, current_year);
    let market_value = original_price * (1.0 + growth.total_growth_rate);

    Some(Estimates {
        original_price,
        current_market_value: market_value,
        improvements,
        total_estimated_value: market_value + improvements,
        capital_gain: market_value - original_price,
        total_growth_rate: growth.total_growth_rate,
        annualized_rate: growth.annualized_rate,
        years_held: growth.years_held,
    })
}

/// Rate as a percentage with one decimal, e.g. `0.2871` -> `"28.7"`.
pub fn format_percent(rate: f64) -> String {
    let pct = rate * 100.0;
    // Avoid rendering "-0.0" for an exact negative zero.
    let pct = if pct == 0.0 { 0.0 } else { pct };
    format!("{:.1}", pct)
}

pub fn market_data_summary(purchase_year: Option<i32>, current_year: i32) -> MarketSummary {
    let data_points = GROWTH_TABLE.len();
    if purchase_year.is_none() {
        return MarketSummary {
            avg_annual_growth: "0.0".to_string(),
            total_growth: "0.0".to_string(),
            years_held: "0".to_string(),
            data_points,
        };
    }

    let growth = calculate_with_yearly_growth(purchase_year, current_year);
    MarketSummary {
        avg_annual_growth: format_percent(growth.annualized_rate),
        total_growth: format_percent(growth.total_growth_rate),
        years_held: growth.years_held.to_string(),
        data_points,
    }
}

pub fn yearly_breakdown(purchase_year: Option<i32>, current_year: i32) -> Vec<YearlyBreakdown> {
    let Some(purchase_year) = valid_purchase_year(purchase_year, current_year) else {
        return Vec::new();
    };

    compounding_years(purchase_year, current_year)
        .filter_map(growth_for_year)
        .map(|entry| YearlyBreakdown {
            year: entry.year,
            growth_rate: average_rate(&entry.sources),
            sources: SourceRates::NAMES.to_vec(),
        })
        .collect()
}

/// Whole-dollar NZD amount with thousands separators, e.g. `$1,234,568`.
pub fn format_nzd(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Text shown to the client once the submission has been handled.
pub fn confirmation_message(name: &str, total_value: f64, recorded: bool) -> String {
    let mut message = format!(
        "Thanks {}! Based on multi-source Auckland market data, your property valuation is {} NZD.",
        name,
        format_nzd(total_value)
    );
    if recorded {
        message.push_str(" Your details have been recorded and our team will contact you within 24 hours.");
    } else {
        message.push_str(" Our team will contact you within 24 hours.");
    }
    message
}
