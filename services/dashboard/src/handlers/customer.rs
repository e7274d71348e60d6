use axum::{Json, extract::Query, extract::State};
use serde::{Deserialize, Serialize};

use rekolo_core::identity::IdentityHeaders;
use rekolo_domain::pagination::PageRequest;
use rekolo_domain::user::User;

use crate::error::DashboardServiceError;
use crate::handlers::require_internal_role;
use crate::state::AppState;
use crate::usecase::customer::{ListCustomersUseCase, SearchCustomersUseCase};

/// Customer row as shown to collectors: resolved display name and a
/// single formatted address line instead of raw profile columns.
#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub role: String,
    #[serde(serialize_with = "rekolo_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for CustomerResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            display_name: user.display_name(),
            address: user.formatted_address(),
            role: user.effective_role(),
            phone: user.phone,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

// ── GET /customers ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CustomerListResponse {
    pub total: u64,
    pub customers: Vec<CustomerResponse>,
}

pub async fn get_customers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<CustomerListResponse>, DashboardServiceError> {
    require_internal_role(&state, &identity).await?;
    let usecase = ListCustomersUseCase {
        roles: state.role_repo(),
        customers: state.customer_repo(),
    };
    let page = usecase.execute(page).await?;
    Ok(Json(CustomerListResponse {
        total: page.total,
        customers: page.users.into_iter().map(CustomerResponse::from).collect(),
    }))
}

// ── GET /customers/search ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search_customers(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CustomerResponse>>, DashboardServiceError> {
    require_internal_role(&state, &identity).await?;
    let usecase = SearchCustomersUseCase {
        roles: state.role_repo(),
        customers: state.customer_repo(),
    };
    let results = usecase.execute(&params.q).await;
    Ok(Json(results.into_iter().map(CustomerResponse::from).collect()))
}
