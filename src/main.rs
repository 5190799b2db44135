use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use log::info;
use warp::Filter;

use property_valuation::config::AppConfig;
use property_valuation::routes;
use property_valuation::services::sheets::SheetsRelay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env()?;
    info!("Using PORT: {}", config.port);

    let relay = Arc::new(SheetsRelay::new(config.sheets.clone()));
    if relay.is_configured() {
        info!("Submissions will be forwarded to Google Sheets");
    }

    // Bind to 0.0.0.0 so the platform router can reach us
    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes(relay).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}
