use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, Func},
};
use uuid::Uuid;

use rekolo_dashboard_schema::{collections, roles, users};
use rekolo_domain::role::Role;
use rekolo_domain::user::{User, UserStatus};

use crate::domain::repository::{CollectionRepository, CustomerRepository, RoleRepository};
use crate::domain::types::{Collection, CollectionStatus};
use crate::error::DashboardServiceError;

/// Bound on a single role-table select, mirroring the store's cap.
const ROLE_SELECT_BOUND: u64 = 1_000;

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn list_roles(&self) -> Result<Vec<Role>, DashboardServiceError> {
        let models = roles::Entity::find()
            .limit(ROLE_SELECT_BOUND)
            .all(&self.db)
            .await
            .context("list roles")?;
        Ok(models
            .into_iter()
            .map(|m| Role {
                id: m.id,
                name: m.name,
            })
            .collect())
    }
}

// ── Customer repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn fetch_page(
        &self,
        role_refs: &[String],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<User>, DashboardServiceError> {
        let models = users::Entity::find()
            .filter(role_scope(role_refs))
            .filter(users::Column::Status.eq("active"))
            .order_by_asc(users::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .context("fetch customer page")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn count(&self, role_refs: &[String]) -> Result<u64, DashboardServiceError> {
        let total = users::Entity::find()
            .filter(role_scope(role_refs))
            .filter(users::Column::Status.eq("active"))
            .count(&self.db)
            .await
            .context("count customers")?;
        Ok(total)
    }

    async fn search_by_name_fragment(
        &self,
        fragment: &str,
        limit: u64,
    ) -> Result<Vec<User>, DashboardServiceError> {
        let pattern = format!("%{}%", fragment.trim().to_lowercase());
        let name_matches = Condition::any()
            .add(Expr::expr(Func::lower(Expr::col(users::Column::FirstName))).like(pattern.as_str()))
            .add(Expr::expr(Func::lower(Expr::col(users::Column::LastName))).like(pattern.as_str()))
            .add(Expr::expr(Func::lower(Expr::col(users::Column::FullName))).like(pattern.as_str()));
        let models = users::Entity::find()
            .filter(users::Column::Status.eq("active"))
            .filter(name_matches)
            .order_by_asc(users::Column::FirstName)
            .limit(limit)
            .all(&self.db)
            .await
            .context("search users by name fragment")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

/// Empty refs mean no role scoping (the degraded listing path).
fn role_scope(role_refs: &[String]) -> Condition {
    if role_refs.is_empty() {
        Condition::all()
    } else {
        Condition::all()
            .add(users::Column::RoleId.is_in(role_refs.iter().map(String::as_str)))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        first_name: model.first_name,
        last_name: model.last_name,
        phone: model.phone,
        role_id: model.role_id,
        role_name: None,
        // Unknown status strings read as inactive so they never surface
        // as collection targets.
        status: UserStatus::parse(&model.status).unwrap_or(UserStatus::Inactive),
        street_addr: model.street_addr,
        subdivision: model.subdivision,
        suburb: model.suburb,
        city: model.city,
        postal_code: model.postal_code,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Collection repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCollectionRepository {
    pub db: DatabaseConnection,
}

impl CollectionRepository for DbCollectionRepository {
    async fn count_in_range(
        &self,
        collector_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, DashboardServiceError> {
        let total = collections::Entity::find()
            .filter(collections::Column::CollectorId.eq(collector_id))
            .filter(collections::Column::CreatedAt.gte(from))
            .filter(collections::Column::CreatedAt.lt(to))
            .count(&self.db)
            .await
            .context("count collections in range")?;
        Ok(total)
    }

    async fn recent_for_collector(
        &self,
        collector_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Collection>, DashboardServiceError> {
        let models = collections::Entity::find()
            .filter(collections::Column::CollectorId.eq(collector_id))
            .order_by_desc(collections::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent collections")?;
        Ok(models.into_iter().map(collection_from_model).collect())
    }

    async fn successful_for_collector(
        &self,
        collector_id: Uuid,
    ) -> Result<Vec<Collection>, DashboardServiceError> {
        let models = collections::Entity::find()
            .filter(collections::Column::CollectorId.eq(collector_id))
            .filter(collections::Column::Status.is_in(["approved", "completed"]))
            .all(&self.db)
            .await
            .context("list successful collections")?;
        Ok(models.into_iter().map(collection_from_model).collect())
    }

    async fn statuses_for_collector(
        &self,
        collector_id: Uuid,
    ) -> Result<Vec<CollectionStatus>, DashboardServiceError> {
        let statuses: Vec<String> = collections::Entity::find()
            .select_only()
            .column(collections::Column::Status)
            .filter(collections::Column::CollectorId.eq(collector_id))
            .into_tuple()
            .all(&self.db)
            .await
            .context("scan collection statuses")?;
        Ok(statuses.iter().map(|s| CollectionStatus::parse(s)).collect())
    }

    async fn for_actor(
        &self,
        actor_id: Uuid,
        statuses: &[CollectionStatus],
        limit: u64,
    ) -> Result<Vec<Collection>, DashboardServiceError> {
        let status_scope = if statuses.is_empty() {
            Condition::all()
        } else {
            Condition::all().add(
                collections::Column::Status
                    .is_in(statuses.iter().map(|s| s.as_str().to_owned())),
            )
        };
        let models = collections::Entity::find()
            .filter(status_scope)
            .filter(
                Condition::any()
                    .add(collections::Column::CollectorId.eq(actor_id))
                    .add(collections::Column::CreatedBy.eq(actor_id)),
            )
            .order_by_desc(collections::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list collections for actor")?;
        Ok(models.into_iter().map(collection_from_model).collect())
    }
}

fn collection_from_model(model: collections::Model) -> Collection {
    Collection {
        id: model.id,
        collector_id: model.collector_id,
        customer_id: model.customer_id,
        customer_name: model.customer_name,
        pickup_address: model.pickup_address,
        status: CollectionStatus::parse(&model.status),
        total_weight_kg: model.total_weight_kg,
        total_value: model.total_value,
        created_by: model.created_by,
        actual_time: model.actual_time,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
