use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use rekolo_core::health::{healthz, readyz};
use rekolo_core::middleware::request_id_layer;

use crate::handlers::{
    customer::{get_customers, search_customers},
    dashboard::get_dashboard,
    pickup::get_pickups,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Dashboard
        .route("/dashboard", get(get_dashboard))
        // Customers
        .route("/customers", get(get_customers))
        .route("/customers/search", get(search_customers))
        // Pickup requests
        .route("/pickups", get(get_pickups))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
