#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use rekolo_domain::role::Role;
use rekolo_domain::user::User;

use crate::domain::types::{Collection, CollectionStatus};
use crate::error::DashboardServiceError;

/// Repository for the role lookup table.
pub trait RoleRepository: Send + Sync {
    /// List every role, capped at the store's single-select bound.
    async fn list_roles(&self) -> Result<Vec<Role>, DashboardServiceError>;
}

/// Repository for customer-facing user profiles. Only active users are
/// ever returned.
pub trait CustomerRepository: Send + Sync {
    /// One page of active users carrying any of `role_refs` (matched
    /// against the textual role reference), ordered by creation time.
    /// An empty `role_refs` slice means no role scoping.
    async fn fetch_page(
        &self,
        role_refs: &[String],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<User>, DashboardServiceError>;

    /// Total active users carrying any of `role_refs`; empty slice means
    /// no role scoping.
    async fn count(&self, role_refs: &[String]) -> Result<u64, DashboardServiceError>;

    /// Server-side substring candidate set for the degraded search path.
    async fn search_by_name_fragment(
        &self,
        fragment: &str,
        limit: u64,
    ) -> Result<Vec<User>, DashboardServiceError>;
}

/// Read-only aggregates over recorded pickups.
pub trait CollectionRepository: Send + Sync {
    /// Count of the collector's pickups created within `[from, to)`.
    async fn count_in_range(
        &self,
        collector_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, DashboardServiceError>;

    /// The collector's most recent pickups, newest first.
    async fn recent_for_collector(
        &self,
        collector_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Collection>, DashboardServiceError>;

    /// All of the collector's successful (approved/completed) pickups.
    async fn successful_for_collector(
        &self,
        collector_id: Uuid,
    ) -> Result<Vec<Collection>, DashboardServiceError>;

    /// Status of every pickup for the collector, any state.
    async fn statuses_for_collector(
        &self,
        collector_id: Uuid,
    ) -> Result<Vec<CollectionStatus>, DashboardServiceError>;

    /// Collections where the actor is the collector or the creator,
    /// newest first, optionally narrowed to `statuses` (empty slice means
    /// any status).
    async fn for_actor(
        &self,
        actor_id: Uuid,
        statuses: &[CollectionStatus],
        limit: u64,
    ) -> Result<Vec<Collection>, DashboardServiceError>;
}
