//! User records as read from the external store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    /// Parse from the store's string column. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

/// A user row from the external store.
///
/// `role_id` is an opaque reference: sometimes a literal role name,
/// sometimes a store primary key that needs a lookup. `role_name` is the
/// transiently resolved canonical name, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub status: UserStatus,
    pub street_addr: Option<String>,
    pub subdivision: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name precedence: first+last name, then full name, then the
    /// local part of the email.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        if !first.is_empty() && !last.is_empty() {
            return format!("{first} {last}");
        }
        if !first.is_empty() {
            return first.to_owned();
        }
        if let Some(full) = self.full_name.as_deref() {
            if !full.trim().is_empty() {
                return full.trim().to_owned();
            }
        }
        self.email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_owned()
    }

    /// Non-empty address fragments joined with `", "`.
    pub fn formatted_address(&self) -> String {
        let parts: Vec<&str> = [
            self.street_addr.as_deref(),
            self.subdivision.as_deref(),
            self.suburb.as_deref(),
            self.city.as_deref(),
            self.postal_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect();
        if parts.is_empty() {
            "Address not provided".to_owned()
        } else {
            parts.join(", ")
        }
    }

    /// The effective role: the resolved name when present, else the raw
    /// reference, lowercased.
    pub fn effective_role(&self) -> String {
        self.role_name
            .as_deref()
            .or(self.role_id.as_deref())
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Whether this user is a valid collection target: active status and
    /// not carrying an internal role.
    pub fn can_collect_from(&self) -> bool {
        self.status == UserStatus::Active && !role::is_internal(&self.effective_role())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn base_user() -> User {
        User {
            id: Uuid::now_v7(),
            email: "thandi.mokoena@example.com".into(),
            full_name: None,
            first_name: None,
            last_name: None,
            phone: None,
            role_id: Some("resident".into()),
            role_name: None,
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

    #[test]
    fn should_parse_known_statuses() {
        assert_eq!(UserStatus::parse("active"), Some(UserStatus::Active));
        assert_eq!(UserStatus::parse("Inactive"), Some(UserStatus::Inactive));
        assert_eq!(UserStatus::parse("SUSPENDED"), Some(UserStatus::Suspended));
        assert_eq!(UserStatus::parse("banned"), None);
    }

    #[test]
    fn should_prefer_first_and_last_name() {
        let mut u = base_user();
        u.first_name = Some("Thandi".into());
        u.last_name = Some("Mokoena".into());
        u.full_name = Some("Someone Else".into());
        assert_eq!(u.display_name(), "Thandi Mokoena");
    }

    #[test]
    fn should_fall_back_to_full_name() {
        let mut u = base_user();
        u.full_name = Some("Thandi Mokoena".into());
        assert_eq!(u.display_name(), "Thandi Mokoena");
    }

    #[test]
    fn should_fall_back_to_email_local_part() {
        let u = base_user();
        assert_eq!(u.display_name(), "thandi.mokoena");
    }

    #[test]
    fn should_join_address_fragments() {
        let mut u = base_user();
        u.street_addr = Some("12 Vilakazi St".into());
        u.suburb = Some("Orlando West".into());
        u.city = Some("Soweto".into());
        u.postal_code = Some("1804".into());
        assert_eq!(
            u.formatted_address(),
            "12 Vilakazi St, Orlando West, Soweto, 1804"
        );
    }

    #[test]
    fn should_report_missing_address() {
        assert_eq!(base_user().formatted_address(), "Address not provided");
    }

    #[test]
    fn should_allow_collecting_from_active_resident() {
        assert!(base_user().can_collect_from());
    }

    #[test]
    fn should_not_collect_from_internal_roles() {
        let mut u = base_user();
        u.role_name = Some("collector".into());
        assert!(!u.can_collect_from());
    }

    #[test]
    fn should_not_collect_from_inactive_users() {
        let mut u = base_user();
        u.status = UserStatus::Inactive;
        assert!(!u.can_collect_from());
    }

    #[test]
    fn should_prefer_resolved_role_name_over_raw_ref() {
        let mut u = base_user();
        u.role_id = Some("9f1c2d3e-0000-0000-0000-000000000000".into());
        u.role_name = Some("Member".into());
        assert_eq!(u.effective_role(), "member");
    }
}
