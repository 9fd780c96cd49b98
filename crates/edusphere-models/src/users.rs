//! User records and the authenticated principal.

use chrono::{DateTime, Utc};
use edusphere_core::UserRole;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::{LoginUser, RoleProfile};

/// A row of `users` including the password hash. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user without credentials, safe to return from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl From<UserRecord> for LoginUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        }
    }
}

/// The authenticated identity attached to a request.
///
/// Built on every request from one join of `users` with the extension table matching the
/// user's current role. The `*_id` fields are set only when that extension row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Principal {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub teacher_id: Option<i64>,
    pub subject: Option<String>,
    pub student_id: Option<i64>,
    pub grade: Option<String>,
    pub parent_id: Option<i64>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Principal {
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }
}

/// Changes a user's role, supplying the new role's extension fields.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleDto {
    #[serde(flatten)]
    pub profile: RoleProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: UserRole) -> Principal {
        Principal {
            id: 1,
            name: "Test".to_string(),
            email: "test@school.com".to_string(),
            role,
            teacher_id: None,
            subject: None,
            student_id: None,
            grade: None,
            parent_id: None,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_has_any_role() {
        let p = principal(UserRole::Parent);
        assert!(p.has_any_role(&[UserRole::Admin, UserRole::Parent]));
        assert!(!p.has_any_role(&[UserRole::Admin, UserRole::Student]));
        assert!(!p.has_any_role(&[]));
    }

    #[test]
    fn test_public_user_drops_password() {
        let now = Utc::now();
        let record = UserRecord {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@school.com".to_string(),
            password: "$2b$12$hash".to_string(),
            role: UserRole::Teacher,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(PublicUser::from(record)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "teacher");
    }

    #[test]
    fn test_update_role_payload() {
        let dto: UpdateRoleDto =
            serde_json::from_str(r#"{"role":"student","grade":"10"}"#).unwrap();
        assert_eq!(
            dto.profile,
            RoleProfile::Student {
                grade: "10".to_string()
            }
        );
    }
}
