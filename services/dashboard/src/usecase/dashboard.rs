use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Local, LocalResult, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use rekolo_core::fetch::{FetchError, guarded};
use rekolo_domain::user::User;

use crate::domain::repository::{CollectionRepository, CustomerRepository, RoleRepository};
use crate::domain::types::{CollectionStatus, DashboardStats, PickupSummary, collection_rate};
use crate::error::DashboardServiceError;
use crate::usecase::role::customer_role_refs;

/// Budget for each dashboard source fetch.
pub const ARM_BUDGET: Duration = Duration::from_secs(10);

pub const RECENT_PICKUPS_LIMIT: u64 = 5;
pub const CUSTOMER_PREVIEW_LIMIT: u64 = 50;
pub const OPEN_REQUESTS_LIMIT: u64 = 10;

// ── LoadDashboard ────────────────────────────────────────────────────────────

/// Aggregate the collector's dashboard from independently guarded source
/// fetches. Each source that fails or runs past its budget degrades to
/// zero/empty without holding back the others; the result is always a
/// usable `DashboardStats`.
pub struct LoadDashboardUseCase<R, C, K>
where
    R: RoleRepository,
    C: CustomerRepository,
    K: CollectionRepository,
{
    pub roles: R,
    pub customers: C,
    pub collections: K,
}

impl<R, C, K> LoadDashboardUseCase<R, C, K>
where
    R: RoleRepository,
    C: CustomerRepository,
    K: CollectionRepository,
{
    pub async fn execute(&self, actor_id: Uuid) -> DashboardStats {
        let (from, to) = day_bounds(Local::now());

        let (today, roster, recent, successes) = tokio::join!(
            guarded(
                self.collections.count_in_range(actor_id, from, to),
                ARM_BUDGET,
            ),
            guarded(self.roster_preview(), ARM_BUDGET),
            guarded(
                self.collections
                    .recent_for_collector(actor_id, RECENT_PICKUPS_LIMIT),
                ARM_BUDGET,
            ),
            guarded(
                self.collections.successful_for_collector(actor_id),
                ARM_BUDGET,
            ),
        );

        let today_pickups = unwrap_metric(today, "today-count");
        let (total_customers, customers) = unwrap_metric(roster, "customer-roster");
        let recent_pickups: Vec<PickupSummary> = unwrap_metric(recent, "recent-pickups")
            .into_iter()
            .map(PickupSummary::from)
            .collect();
        let successes = unwrap_metric(successes, "collection-totals");
        let total_weight_kg = successes.iter().map(|c| c.total_weight_kg).sum();
        let total_value = successes.iter().map(|c| c.total_value).sum();

        // Ordered after the fan-in: the rate needs the full status scan,
        // and isolating it keeps a slow scan from being confused with the
        // totals arm. The successful subset above cannot recover the
        // denominator, so on failure the rate stays 0.
        let rate = match guarded(
            self.collections.statuses_for_collector(actor_id),
            ARM_BUDGET,
        )
        .await
        {
            Ok(statuses) => collection_rate(&statuses),
            Err(e) => {
                tracing::warn!(error = %e, "status scan failed, collection rate stays 0");
                0.0
            }
        };

        // Best effort: an empty request list is a valid dashboard.
        let open = [CollectionStatus::Pending, CollectionStatus::Submitted];
        let pickup_requests = match guarded(
            self.collections
                .for_actor(actor_id, &open, OPEN_REQUESTS_LIMIT),
            ARM_BUDGET,
        )
        .await
        {
            Ok(rows) => rows.into_iter().map(PickupSummary::from).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "open-request fetch failed, showing empty list");
                Vec::new()
            }
        };

        DashboardStats {
            today_pickups,
            total_customers,
            customers,
            recent_pickups,
            pickup_requests,
            total_weight_kg,
            total_value,
            collection_rate: rate,
        }
    }

    async fn roster_preview(&self) -> Result<(u64, Vec<User>), DashboardServiceError> {
        let roles = self.roles.list_roles().await?;
        let refs = customer_role_refs(&roles);
        let total = self.customers.count(&refs).await?;
        let preview = self
            .customers
            .fetch_page(&refs, 0, CUSTOMER_PREVIEW_LIMIT)
            .await?;
        Ok((total, preview))
    }
}

fn unwrap_metric<T: Default>(result: Result<T, FetchError>, source: &'static str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, source, "dashboard source degraded to default");
            T::default()
        }
    }
}

/// Bounds of the calendar day containing `now`, in UTC.
fn day_bounds<Tz: TimeZone>(now: DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    let start = resolve_local(&tz, midnight).unwrap_or_else(|| now.clone());
    let end = resolve_local(&tz, midnight + ChronoDuration::days(1))
        .unwrap_or_else(|| start.clone() + ChronoDuration::days(1));
    (start.with_timezone(&Utc), end.with_timezone(&Utc))
}

fn resolve_local<Tz: TimeZone>(
    tz: &Tz,
    naive: chrono::NaiveDateTime,
) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => Some(t),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Collection, CollectionStatus};
    use chrono::Utc;
    use rekolo_domain::role::Role;
    use rekolo_domain::user::UserStatus;

    struct MockRoleRepo;

    impl RoleRepository for MockRoleRepo {
        async fn list_roles(&self) -> Result<Vec<Role>, DashboardServiceError> {
            Ok(vec![])
        }
    }

    struct MockCustomerRepo {
        roster: Result<Vec<User>, ()>,
        stall: bool,
    }

    struct MockCollectionRepo {
        count: Result<u64, ()>,
        recent: Result<Vec<Collection>, ()>,
        successes: Result<Vec<Collection>, ()>,
        statuses: Result<Vec<CollectionStatus>, ()>,
        open: Result<Vec<Collection>, ()>,
    }

    fn internal_error() -> DashboardServiceError {
        DashboardServiceError::Internal(anyhow::anyhow!("query failed"))
    }

    impl CustomerRepository for MockCustomerRepo {
        async fn fetch_page(
            &self,
            _role_refs: &[String],
            _offset: u64,
            limit: u64,
        ) -> Result<Vec<User>, DashboardServiceError> {
            if self.stall {
                std::future::pending::<()>().await;
            }
            let roster = self.roster.clone().map_err(|_| internal_error())?;
            Ok(roster.into_iter().take(limit as usize).collect())
        }

        async fn count(&self, _role_refs: &[String]) -> Result<u64, DashboardServiceError> {
            if self.stall {
                std::future::pending::<()>().await;
            }
            Ok(self.roster.clone().map_err(|_| internal_error())?.len() as u64)
        }

        async fn search_by_name_fragment(
            &self,
            _fragment: &str,
            _limit: u64,
        ) -> Result<Vec<User>, DashboardServiceError> {
            Ok(vec![])
        }
    }

    impl CollectionRepository for MockCollectionRepo {
        async fn count_in_range(
            &self,
            _collector_id: Uuid,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<u64, DashboardServiceError> {
            self.count.map_err(|_| internal_error())
        }

        async fn recent_for_collector(
            &self,
            _collector_id: Uuid,
            limit: u64,
        ) -> Result<Vec<Collection>, DashboardServiceError> {
            let rows = self.recent.clone().map_err(|_| internal_error())?;
            Ok(rows.into_iter().take(limit as usize).collect())
        }

        async fn successful_for_collector(
            &self,
            _collector_id: Uuid,
        ) -> Result<Vec<Collection>, DashboardServiceError> {
            self.successes.clone().map_err(|_| internal_error())
        }

        async fn statuses_for_collector(
            &self,
            _collector_id: Uuid,
        ) -> Result<Vec<CollectionStatus>, DashboardServiceError> {
            self.statuses.clone().map_err(|_| internal_error())
        }

        async fn for_actor(
            &self,
            _actor_id: Uuid,
            statuses: &[CollectionStatus],
            limit: u64,
        ) -> Result<Vec<Collection>, DashboardServiceError> {
            let rows = self.open.clone().map_err(|_| internal_error())?;
            Ok(rows
                .into_iter()
                .filter(|c| statuses.is_empty() || statuses.contains(&c.status))
                .take(limit as usize)
                .collect())
        }
    }

    fn collection(status: CollectionStatus, weight: f64, value: f64) -> Collection {
        Collection {
            id: Uuid::now_v7(),
            collector_id: Uuid::now_v7(),
            customer_id: None,
            customer_name: Some("Thandi Mokoena".into()),
            pickup_address: Some("12 Vilakazi St".into()),
            status,
            total_weight_kg: weight,
            total_value: value,
            created_by: None,
            actual_time: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn resident(first: &str) -> User {
        User {
            id: Uuid::now_v7(),
            email: format!("{}@example.com", first.to_lowercase()),
            full_name: None,
            first_name: Some(first.into()),
            last_name: Some("Test".into()),
            phone: None,
            role_id: Some("resident".into()),
            role_name: Some("resident".into()),
            status: UserStatus::Active,
            street_addr: None,
            subdivision: None,
            suburb: None,
            city: None,
            postal_code: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn healthy_collections() -> MockCollectionRepo {
        MockCollectionRepo {
            count: Ok(3),
            recent: Ok(vec![collection(CollectionStatus::Completed, 4.0, 60.0)]),
            successes: Ok(vec![
                collection(CollectionStatus::Approved, 4.0, 60.0),
                collection(CollectionStatus::Completed, 6.0, 90.0),
            ]),
            statuses: Ok(vec![
                CollectionStatus::Approved,
                CollectionStatus::Approved,
                CollectionStatus::Approved,
                CollectionStatus::Approved,
                CollectionStatus::Completed,
                CollectionStatus::Completed,
                CollectionStatus::Pending,
                CollectionStatus::Pending,
                CollectionStatus::Rejected,
                CollectionStatus::Cancelled,
            ]),
            open: Ok(vec![collection(CollectionStatus::Pending, 0.0, 0.0)]),
        }
    }

    #[tokio::test]
    async fn should_aggregate_all_sources_when_healthy() {
        let usecase = LoadDashboardUseCase {
            roles: MockRoleRepo,
            customers: MockCustomerRepo {
                roster: Ok(vec![resident("Thandi"), resident("Sipho")]),
                stall: false,
            },
            collections: healthy_collections(),
        };
        let stats = usecase.execute(Uuid::now_v7()).await;
        assert_eq!(stats.today_pickups, 3);
        assert_eq!(stats.total_customers, 2);
        assert_eq!(stats.customers.len(), 2);
        assert_eq!(stats.recent_pickups.len(), 1);
        assert_eq!(stats.pickup_requests.len(), 1);
        assert_eq!(stats.total_weight_kg, 10.0);
        assert_eq!(stats.total_value, 150.0);
        assert_eq!(stats.collection_rate, 60.0);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_other_sources_when_roster_stalls() {
        let usecase = LoadDashboardUseCase {
            roles: MockRoleRepo,
            customers: MockCustomerRepo {
                roster: Ok(vec![resident("Thandi")]),
                stall: true,
            },
            collections: healthy_collections(),
        };
        let stats = usecase.execute(Uuid::now_v7()).await;
        assert_eq!(stats.total_customers, 0);
        assert!(stats.customers.is_empty());
        assert_eq!(stats.today_pickups, 3);
        assert_eq!(stats.recent_pickups.len(), 1);
        assert_eq!(stats.collection_rate, 60.0);
    }

    #[tokio::test]
    async fn should_keep_rate_zero_when_status_scan_fails() {
        let mut collections = healthy_collections();
        collections.statuses = Err(());
        let usecase = LoadDashboardUseCase {
            roles: MockRoleRepo,
            customers: MockCustomerRepo {
                roster: Ok(vec![]),
                stall: false,
            },
            collections,
        };
        let stats = usecase.execute(Uuid::now_v7()).await;
        // Totals still sum even though the rate denominator is gone.
        assert_eq!(stats.collection_rate, 0.0);
        assert_eq!(stats.total_weight_kg, 10.0);
    }

    #[tokio::test]
    async fn should_show_empty_requests_when_that_fetch_fails() {
        let mut collections = healthy_collections();
        collections.open = Err(());
        let usecase = LoadDashboardUseCase {
            roles: MockRoleRepo,
            customers: MockCustomerRepo {
                roster: Ok(vec![]),
                stall: false,
            },
            collections,
        };
        let stats = usecase.execute(Uuid::now_v7()).await;
        assert!(stats.pickup_requests.is_empty());
        assert_eq!(stats.recent_pickups.len(), 1);
    }

    #[test]
    fn should_bound_the_utc_calendar_day() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 14, 30, 0).unwrap();
        let (from, to) = day_bounds(now);
        assert_eq!(from, Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2026, 8, 26, 0, 0, 0).unwrap());
    }
}
