// src/bin/growth_report.rs
use std::env;

use property_valuation::models::FormData;
use property_valuation::services::calculations::{
    average_growth_by_year, calculate_all_estimates, current_year, format_nzd, format_percent,
};

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let price: f64 = args.next().as_deref().unwrap_or("750000").parse()?;
    let year: i32 = args.next().as_deref().unwrap_or("2020").parse()?;

    println!("Year  Avg growth");
    for (year, rate) in average_growth_by_year() {
        println!("{}  {:>6}%", year, format_percent(rate));
    }

    let form = FormData {
        purchase_price: Some(price),
        purchase_year: Some(year),
        ..FormData::default()
    };
    match calculate_all_estimates(&form, current_year()) {
        Some(e) => {
            println!();
            println!("Bought {} in {}", format_nzd(price), year);
            println!("  Market value:   {}", format_nzd(e.current_market_value));
            println!("  Capital gain:   {}", format_nzd(e.capital_gain));
            println!("  Total growth:   {}%", format_percent(e.total_growth_rate));
            println!("  Annualized:     {}% over {} years", format_percent(e.annualized_rate), e.years_held);
        }
        None => println!("Purchase price must be positive"),
    }
    Ok(())
}
