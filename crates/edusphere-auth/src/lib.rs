//! # Edusphere Auth
//!
//! Session token types and JWT utilities.
//!
//! - [`claims`]: the signed token payload
//! - [`jwt`]: token minting and verification
//!
//! A session token carries only the user id and the role at issuance. It is never
//! persisted and never revoked server side; it stops working when it expires. Role
//! extensions are not embedded: they are re-derived from the database on every request.
//!
//! # Example
//!
//! ```ignore
//! use edusphere_auth::{create_access_token, verify_token};
//! use edusphere_config::JwtConfig;
//! use edusphere_core::UserRole;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(42, UserRole::Teacher, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id, 42);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, create_token_at, verify_token};
