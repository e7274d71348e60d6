use rekolo_core::paging::{MAX_ROWS, PAGE_SIZE, read_all_pages};
use rekolo_domain::pagination::PageRequest;
use rekolo_domain::search::{MIN_QUERY_LEN, filter_substring, match_customers};
use rekolo_domain::user::User;

use crate::domain::repository::{CustomerRepository, RoleRepository};
use crate::error::DashboardServiceError;
use crate::usecase::role::{annotate_role_names, customer_role_refs};

/// Candidate-set bound for the degraded server-side search.
pub const SEARCH_CANDIDATE_LIMIT: u64 = 100;

// ── ListCustomers ────────────────────────────────────────────────────────────

pub struct CustomerPage {
    pub total: u64,
    pub users: Vec<User>,
}

pub struct ListCustomersUseCase<R: RoleRepository, C: CustomerRepository> {
    pub roles: R,
    pub customers: C,
}

impl<R: RoleRepository, C: CustomerRepository> ListCustomersUseCase<R, C> {
    pub async fn execute(&self, page: PageRequest) -> Result<CustomerPage, DashboardServiceError> {
        let page = page.clamped();
        // A broken role table must not empty the customer list; an empty
        // ref set tells the repository to skip role scoping entirely.
        let (roles, refs) = match self.roles.list_roles().await {
            Ok(roles) => {
                let refs = customer_role_refs(&roles);
                (roles, refs)
            }
            Err(e) => {
                tracing::warn!(error = %e, "role lookup failed, listing without role filter");
                (Vec::new(), Vec::new())
            }
        };
        let total = self.customers.count(&refs).await?;
        let offset = ((page.page - 1) * page.per_page) as u64;
        let mut users = self
            .customers
            .fetch_page(&refs, offset, page.per_page as u64)
            .await?;
        annotate_role_names(&mut users, &roles);
        Ok(CustomerPage { total, users })
    }
}

// ── SearchCustomers ──────────────────────────────────────────────────────────

/// Free-text customer search over the full roster.
///
/// The happy path reads the whole bounded roster page by page and runs
/// the tokenized matcher over it. If the roster read fails, a degraded
/// path asks the store for a substring-filtered candidate set and applies
/// only the exact-substring filter — lower precision, but the search box
/// keeps working. Failures never surface; the worst case is an empty
/// result list.
pub struct SearchCustomersUseCase<R: RoleRepository, C: CustomerRepository> {
    pub roles: R,
    pub customers: C,
}

impl<R: RoleRepository, C: CustomerRepository> SearchCustomersUseCase<R, C> {
    pub async fn execute(&self, query: &str) -> Vec<User> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        match self.full_roster().await {
            Ok(roster) => match_customers(&roster, query),
            Err(e) => {
                tracing::warn!(error = %e, "roster read failed, degrading to substring search");
                match self
                    .customers
                    .search_by_name_fragment(query, SEARCH_CANDIDATE_LIMIT)
                    .await
                {
                    Ok(candidates) => filter_substring(&candidates, query),
                    Err(e) => {
                        tracing::warn!(error = %e, "degraded substring search failed");
                        Vec::new()
                    }
                }
            }
        }
    }

    async fn full_roster(&self) -> Result<Vec<User>, DashboardServiceError> {
        let roles = self.roles.list_roles().await?;
        let refs = customer_role_refs(&roles);
        let mut roster = read_all_pages(PAGE_SIZE, MAX_ROWS, |offset, limit| {
            self.customers.fetch_page(&refs, offset, limit)
        })
        .await?;
        annotate_role_names(&mut roster, &roles);
        Ok(roster)
    }
}
