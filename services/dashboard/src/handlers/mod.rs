pub mod customer;
pub mod dashboard;
pub mod pickup;

use rekolo_core::identity::IdentityHeaders;
use rekolo_domain::role::is_internal;

use crate::error::DashboardServiceError;
use crate::state::AppState;
use crate::usecase::role::ResolveActorRoleUseCase;

/// Resolve the actor's role and reject customer-facing accounts. Every
/// dashboard surface is internal-only; customers have their own app.
pub async fn require_internal_role(
    state: &AppState,
    identity: &IdentityHeaders,
) -> Result<String, DashboardServiceError> {
    let usecase = ResolveActorRoleUseCase {
        repo: state.role_repo(),
    };
    let role = usecase.execute(identity.role_ref.as_deref()).await;
    if !is_internal(&role) {
        return Err(DashboardServiceError::Forbidden);
    }
    Ok(role)
}
