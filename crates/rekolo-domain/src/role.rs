//! Role primitives for the external store's role table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role names eligible to be collected from, in lookup order.
/// Any role outside this set is never surfaced as a customer.
pub const CUSTOMER_ROLE_NAMES: [&str; 4] = ["resident", "customer", "member", "user"];

/// Internal roles that must never appear as collection targets.
pub const INTERNAL_ROLE_NAMES: [&str; 4] = ["collector", "admin", "super_admin", "office_staff"];

/// Default role for the authenticated actor when resolution fails.
pub const DEFAULT_ACTOR_ROLE: &str = "collector";

/// A role row from the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}

/// Whether `name` is one of the customer-facing roles (case-insensitive).
pub fn is_customer_facing(name: &str) -> bool {
    CUSTOMER_ROLE_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name))
}

/// Whether `name` is an internal role (case-insensitive).
pub fn is_internal(name: &str) -> bool {
    INTERNAL_ROLE_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name))
}

/// Whether a role reference looks like an opaque store identifier rather
/// than a role name. The store's primary keys use `-` as a separator;
/// role names never contain one.
pub fn is_opaque_role_ref(role_ref: &str) -> bool {
    role_ref.is_empty() || role_ref.contains('-')
}
