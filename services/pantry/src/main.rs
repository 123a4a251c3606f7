use std::time::Duration;

use sea_orm::Database;
use tracing::info;

use beforeyougo_core::tracing::init_tracing;
use beforeyougo_pantry::config::PantryConfig;
use beforeyougo_pantry::infra::openfoodfacts::OpenFoodFactsClient;
use beforeyougo_pantry::router::build_router;
use beforeyougo_pantry::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = PantryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let products = OpenFoodFactsClient::new(config.openfoodfacts_url.clone())
        .expect("failed to build Open Food Facts client");

    let state = AppState {
        db,
        products,
        barcode_timeout: Duration::from_millis(config.barcode_lookup_timeout_ms),
        enable_signup: config.enable_signup,
        require_activation: config.require_activation,
        base_url: config.base_url.clone(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.pantry_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(
        signup = config.enable_signup,
        "pantry service listening on {http_addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
