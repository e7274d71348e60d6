use std::time::Duration;

use rekolo_core::fetch::guarded;
use rekolo_domain::role::{
    CUSTOMER_ROLE_NAMES, DEFAULT_ACTOR_ROLE, Role, is_customer_facing, is_opaque_role_ref,
};
use rekolo_domain::user::User;

use crate::domain::repository::RoleRepository;
use crate::error::DashboardServiceError;

/// Budget for the role-table lookup on the auth path.
pub const ROLE_LOOKUP_BUDGET: Duration = Duration::from_secs(5);

// ── ResolveActorRole ─────────────────────────────────────────────────────────

/// Resolve the gateway's opaque role reference to a canonical role name.
///
/// A reference without a `-` is already a role name and is returned
/// lowercased without touching the store. Anything else is looked up in
/// the role table under [`ROLE_LOOKUP_BUDGET`]; a miss, failure, or
/// timeout falls back to [`DEFAULT_ACTOR_ROLE`] so sign-in never blocks
/// on the lookup.
pub struct ResolveActorRoleUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> ResolveActorRoleUseCase<R> {
    pub async fn execute(&self, role_ref: Option<&str>) -> String {
        let Some(raw) = role_ref.map(str::trim).filter(|s| !s.is_empty()) else {
            return DEFAULT_ACTOR_ROLE.to_owned();
        };
        if !is_opaque_role_ref(raw) {
            return raw.to_ascii_lowercase();
        }
        match guarded(self.repo.list_roles(), ROLE_LOOKUP_BUDGET).await {
            Ok(roles) => roles
                .iter()
                .find(|r| r.id.to_string() == raw)
                .map(|r| r.name.to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_ACTOR_ROLE.to_owned()),
            Err(e) => {
                tracing::warn!(error = %e, "role lookup failed, using default role");
                DEFAULT_ACTOR_ROLE.to_owned()
            }
        }
    }
}

// ── ResolveCustomerRoleRefs ──────────────────────────────────────────────────

/// Collect every textual reference under which a customer-facing user may
/// be stored: the canonical role names themselves plus the store keys of
/// role rows carrying those names. Names with no role row are simply not
/// expanded into a key.
pub struct ResolveCustomerRoleRefsUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> ResolveCustomerRoleRefsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<String>, DashboardServiceError> {
        let roles = self.repo.list_roles().await?;
        Ok(customer_role_refs(&roles))
    }
}

/// The canonical customer role names plus the store keys of role rows
/// carrying those names.
pub fn customer_role_refs(roles: &[Role]) -> Vec<String> {
    let mut refs: Vec<String> = CUSTOMER_ROLE_NAMES.iter().map(|n| (*n).to_owned()).collect();
    refs.extend(
        roles
            .iter()
            .filter(|r| is_customer_facing(&r.name))
            .map(|r| r.id.to_string()),
    );
    refs
}

/// Fill in each user's transient `role_name` from the role table: a
/// reference matching a role row's key resolves to that row's name, a
/// plain name passes through lowercased, anything else stays unresolved.
pub fn annotate_role_names(users: &mut [User], roles: &[Role]) {
    for user in users {
        let Some(role_ref) = user.role_id.as_deref() else {
            continue;
        };
        user.role_name = if is_opaque_role_ref(role_ref) {
            roles
                .iter()
                .find(|r| r.id.to_string() == role_ref)
                .map(|r| r.name.to_ascii_lowercase())
        } else {
            Some(role_ref.to_ascii_lowercase())
        };
    }
}
