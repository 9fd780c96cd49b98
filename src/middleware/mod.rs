//! Authentication and authorization middleware.
//!
//! - [`auth`]: verifies the bearer token and attaches the request [`Principal`]
//! - [`role`]: role guards, as `from_fn` layers and as extractors
//!
//! # Request lifecycle
//!
//! ```text
//! Unauthenticated -> TokenVerified -> ProfileLoaded -> RoleAuthorized -> Handled
//! ```
//!
//! 1. `authenticate` reads `Authorization: Bearer <token>` and verifies it
//! 2. It loads the principal with one join over `users` and the role extension tables
//! 3. A guard checks the principal's current role against an allow-list
//! 4. The handler runs with the principal available through [`auth::AuthUser`]
//!
//! Any failure ends the request immediately with a JSON error.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::{auth::authenticate, role::is_admin};
//!
//! let admin_routes = Router::new()
//!     .route("/users", get(list_users))
//!     .route_layer(middleware::from_fn(is_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
//! ```
//!
//! [`Principal`]: edusphere_models::Principal

pub mod auth;
pub mod role;
