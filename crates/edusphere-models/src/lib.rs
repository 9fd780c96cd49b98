//! # Edusphere Models
//!
//! Domain models and DTOs for the Edusphere API.
//!
//! - [`auth`]: login and registration payloads, including the per-role [`RoleProfile`]
//! - [`users`]: user records, the public user projection, and the request [`Principal`]
//! - [`assignments`]: teacher-owned assignments
//!
//! # Example
//!
//! ```ignore
//! use edusphere_models::{Principal, RoleProfile, UserRole};
//!
//! let profile = RoleProfile::Teacher { subject: "Physics".to_string() };
//! assert_eq!(profile.role(), UserRole::Teacher);
//! ```

pub mod assignments;
pub mod auth;
pub mod users;

pub use edusphere_core::UserRole;

// Re-export commonly used types at crate root for convenience
pub use assignments::{Assignment, CreateAssignmentDto};
pub use auth::{LoginRequest, LoginResponse, LoginUser, RegisterRequest, RoleProfile};
pub use users::{Principal, PublicUser, UpdateRoleDto, UserRecord};
