use edusphere_core::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of a session token: `{ userId, role, iat, exp }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Id of the user the token was issued to
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Role at issuance. Authorization uses the role loaded at request time instead.
    pub role: UserRole,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}
