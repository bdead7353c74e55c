//! Records returned by the auth service

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The authenticated user, as reported by the auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
    /// Organization the user belongs to; billing is scoped to it
    pub org_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified: OffsetDateTime,
    pub apps: Vec<String>,
    pub billing_id: Option<String>,
}

/// The user's organization, as reported by the auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOrg {
    pub org_id: String,
    /// Payment-system customer id. Absent until the org first checks out.
    pub billing_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub modified: OffsetDateTime,
    pub users: Option<Vec<String>>,
    pub apps: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_service_json() {
        let user: AuthUser = serde_json::from_str(
            r#"{
                "userId": "usr-7f3a",
                "email": "jane@example.com",
                "orgId": "org-19",
                "created": "2024-01-15T10:00:00Z",
                "modified": "2024-02-01T08:30:00Z",
                "apps": ["app-1", "app-2"],
                "billingId": "cus_abc123"
            }"#,
        )
        .unwrap();

        assert_eq!(user.user_id, "usr-7f3a");
        assert_eq!(user.org_id, "org-19");
        assert_eq!(user.apps.len(), 2);
        assert_eq!(user.billing_id.as_deref(), Some("cus_abc123"));
    }

    #[test]
    fn org_without_billing_id_deserializes() {
        let org: AuthOrg = serde_json::from_str(
            r#"{
                "orgId": "org-19",
                "created": "2024-01-15T10:00:00Z",
                "modified": "2024-01-15T10:00:00Z",
                "users": ["usr-7f3a"]
            }"#,
        )
        .unwrap();

        assert_eq!(org.org_id, "org-19");
        assert!(org.billing_id.is_none());
        assert!(org.apps.is_none());
    }
}
