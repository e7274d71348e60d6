use uuid::Uuid;

use crate::domain::repository::CollectionRepository;
use crate::domain::types::{CollectionStatus, PickupSummary};
use crate::error::DashboardServiceError;

/// Rows shown on the standalone pickup-requests page.
pub const PICKUP_LIST_LIMIT: u64 = 50;

// ── ListPickups ──────────────────────────────────────────────────────────────

/// The actor's collections (as collector or creator), newest first, with
/// an optional status filter. Unlike the dashboard's best-effort request
/// list, a failure here is a real error: the page has nothing else to
/// show.
pub struct ListPickupsUseCase<K: CollectionRepository> {
    pub repo: K,
}

impl<K: CollectionRepository> ListPickupsUseCase<K> {
    pub async fn execute(
        &self,
        actor_id: Uuid,
        status: Option<CollectionStatus>,
    ) -> Result<Vec<PickupSummary>, DashboardServiceError> {
        let statuses: Vec<CollectionStatus> = status.into_iter().collect();
        let rows = self
            .repo
            .for_actor(actor_id, &statuses, PICKUP_LIST_LIMIT)
            .await?;
        Ok(rows.into_iter().map(PickupSummary::from).collect())
    }
}
