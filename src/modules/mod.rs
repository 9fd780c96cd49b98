//! Feature modules. Each follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic and SQL
//! - `router.rs`: route table

pub mod assignments;
pub mod auth;
pub mod users;
