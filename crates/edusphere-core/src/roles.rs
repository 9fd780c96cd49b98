//! The closed set of user roles.
//!
//! Roles are stored as lowercase snake_case text in `users.role` and travel in the same
//! form inside token claims and JSON bodies.

use serde::{Deserialize, Serialize};
use sqlx::{Database, Decode, Encode, Postgres, Type, postgres::PgTypeInfo};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Parent,
    HrManager,
    BranchManager,
}

impl UserRole {
    pub const ALL: [UserRole; 6] = [
        UserRole::Admin,
        UserRole::Teacher,
        UserRole::Student,
        UserRole::Parent,
        UserRole::HrManager,
        UserRole::BranchManager,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
            UserRole::Parent => "parent",
            UserRole::HrManager => "hr_manager",
            UserRole::BranchManager => "branch_manager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            "parent" => Ok(UserRole::Parent),
            "hr_manager" => Ok(UserRole::HrManager),
            "branch_manager" => Ok(UserRole::BranchManager),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl Type<Postgres> for UserRole {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for UserRole {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as Encode<'q, Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for UserRole {
    fn decode(
        value: <Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}
