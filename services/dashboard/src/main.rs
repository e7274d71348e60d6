use sea_orm::Database;
use tracing::info;

use rekolo_dashboard::config::DashboardConfig;
use rekolo_dashboard::router::build_router;
use rekolo_dashboard::state::AppState;

#[tokio::main]
async fn main() {
    rekolo_core::tracing::init_tracing();

    let config = DashboardConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.dashboard_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("dashboard service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
