use astra::Server;
use property_insights::analytics::MarketAggregator;
use property_insights::config::AppConfig;
use property_insights::logging::init_logging;
use property_insights::router::{serve_request, AppState};
use tracing::{error, info};

fn main() {
    init_logging();

    // 1️⃣ Load configuration and the lookup tables
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    let market_config = match config.market_config() {
        Ok(market_config) => market_config,
        Err(e) => {
            error!(error = %e, "failed to build market tables");
            std::process::exit(1);
        }
    };
    info!(
        regions = market_config.regions.regions().len(),
        currencies = market_config.rates.iter().count(),
        "market tables loaded"
    );

    // 2️⃣ Shared, read-only state for every worker
    let state = AppState::new(MarketAggregator::new(market_config), config.max_body_bytes);

    // 3️⃣ Start the server
    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| serve_request(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
