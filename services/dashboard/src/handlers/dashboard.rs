use std::time::Duration;

use axum::{Json, extract::State};
use serde::Serialize;

use rekolo_core::identity::IdentityHeaders;

use crate::domain::types::{DashboardStats, PickupSummary};
use crate::error::DashboardServiceError;
use crate::handlers::customer::CustomerResponse;
use crate::handlers::require_internal_role;
use crate::state::AppState;
use crate::usecase::dashboard::LoadDashboardUseCase;

/// Hard ceiling on one dashboard load. The usecase already degrades each
/// source independently; this guard is the last line, trading partial
/// data for a response that always arrives.
pub const PAGE_GUARD: Duration = Duration::from_secs(15);

// ── GET /dashboard ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DashboardResponse {
    pub today_pickups: u64,
    pub total_customers: u64,
    pub customers: Vec<CustomerResponse>,
    pub recent_pickups: Vec<PickupSummary>,
    pub pickup_requests: Vec<PickupSummary>,
    pub total_weight_kg: f64,
    pub total_value: f64,
    pub collection_rate: f64,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            today_pickups: stats.today_pickups,
            total_customers: stats.total_customers,
            customers: stats
                .customers
                .into_iter()
                .map(CustomerResponse::from)
                .collect(),
            recent_pickups: stats.recent_pickups,
            pickup_requests: stats.pickup_requests,
            total_weight_kg: stats.total_weight_kg,
            total_value: stats.total_value,
            collection_rate: stats.collection_rate,
        }
    }
}

pub async fn get_dashboard(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, DashboardServiceError> {
    require_internal_role(&state, &identity).await?;
    let usecase = LoadDashboardUseCase {
        roles: state.role_repo(),
        customers: state.customer_repo(),
        collections: state.collection_repo(),
    };
    let stats = match tokio::time::timeout(PAGE_GUARD, usecase.execute(identity.user_id)).await {
        Ok(stats) => stats,
        Err(_) => {
            tracing::warn!("dashboard load ran past the page guard, serving empty stats");
            DashboardStats::default()
        }
    };
    Ok(Json(DashboardResponse::from(stats)))
}
