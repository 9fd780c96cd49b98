//! # Edusphere Core
//!
//! Core types, errors, and utilities for the Edusphere API.
//!
//! - [`errors`]: Application and authentication error types with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`roles`]: The closed set of user roles and their database codec
//!
//! # Example
//!
//! ```ignore
//! use edusphere_core::errors::{AppError, AuthError};
//! use edusphere_core::password::{hash_password, verify_password};
//! use edusphere_core::roles::UserRole;
//!
//! let hash = hash_password("secure_password")?;
//! let role: UserRole = "teacher".parse()?;
//!
//! // Authentication failures carry their own status code
//! let error: AppError = AuthError::MissingToken.into();
//! ```

pub mod errors;
pub mod password;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::{AppError, AuthError, ErrorResponse, InvalidTokenReason};
pub use password::{hash_password, verify_password};
pub use roles::{ParseRoleError, UserRole};
