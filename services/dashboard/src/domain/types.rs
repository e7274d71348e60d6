//! Collection records and the aggregated dashboard statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rekolo_domain::user::User;

/// Lifecycle status of a recorded pickup. The store column is free text;
/// unrecognized values are carried as [`CollectionStatus::Other`] so they
/// still count toward totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Pending,
    Submitted,
    Approved,
    Completed,
    Rejected,
    Cancelled,
    #[serde(untagged)]
    Other(String),
}

impl CollectionStatus {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "submitted" => Self::Submitted,
            "approved" => Self::Approved,
            "completed" => Self::Completed,
            "rejected" => Self::Rejected,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }

    /// Whether this status counts as a successful collection.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Approved | Self::Completed)
    }

    /// Whether this status represents an open pickup request.
    pub fn is_open_request(&self) -> bool {
        matches!(self, Self::Pending | Self::Submitted)
    }
}

/// A recorded pickup event as read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: Uuid,
    pub collector_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub pickup_address: Option<String>,
    pub status: CollectionStatus,
    pub total_weight_kg: f64,
    pub total_value: f64,
    pub created_by: Option<Uuid>,
    pub actual_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display row for the recent-pickups and pickup-request lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickupSummary {
    pub id: Uuid,
    pub customer_name: String,
    pub address: String,
    pub status: CollectionStatus,
    pub weight_kg: f64,
    pub value: f64,
    #[serde(serialize_with = "rekolo_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Collection> for PickupSummary {
    fn from(c: Collection) -> Self {
        Self {
            id: c.id,
            customer_name: c.customer_name.unwrap_or_else(|| "Unknown customer".to_owned()),
            address: c.pickup_address.unwrap_or_else(|| "Address not provided".to_owned()),
            status: c.status,
            weight_kg: c.total_weight_kg,
            value: c.total_value,
            created_at: c.created_at,
        }
    }
}

/// Aggregated dashboard statistics. Every field degrades to zero/empty
/// independently when its source fetch fails or times out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub today_pickups: u64,
    pub total_customers: u64,
    pub customers: Vec<User>,
    pub recent_pickups: Vec<PickupSummary>,
    pub pickup_requests: Vec<PickupSummary>,
    pub total_weight_kg: f64,
    pub total_value: f64,
    pub collection_rate: f64,
}

/// Percentage of collections in a successful status, 0.0 when the slice
/// is empty. Unknown statuses stay in the denominator.
pub fn collection_rate(statuses: &[CollectionStatus]) -> f64 {
    if statuses.is_empty() {
        return 0.0;
    }
    let successful = statuses.iter().filter(|s| s.is_successful()).count();
    successful as f64 / statuses.len() as f64 * 100.0
}
