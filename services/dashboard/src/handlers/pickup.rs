use axum::{Json, extract::Query, extract::State};
use serde::Deserialize;

use rekolo_core::identity::IdentityHeaders;

use crate::domain::types::{CollectionStatus, PickupSummary};
use crate::error::DashboardServiceError;
use crate::handlers::require_internal_role;
use crate::state::AppState;
use crate::usecase::pickup::ListPickupsUseCase;

// ── GET /pickups ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PickupParams {
    pub status: Option<String>,
}

pub async fn get_pickups(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(params): Query<PickupParams>,
) -> Result<Json<Vec<PickupSummary>>, DashboardServiceError> {
    require_internal_role(&state, &identity).await?;
    let usecase = ListPickupsUseCase {
        repo: state.collection_repo(),
    };
    let status = params.status.as_deref().map(CollectionStatus::parse);
    let rows = usecase.execute(identity.user_id, status).await?;
    Ok(Json(rows))
}
