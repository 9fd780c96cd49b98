//! # Edusphere Config
//!
//! Configuration types for the Edusphere API, loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`demo`]: opt-in fallback demo credentials
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection settings
//!
//! Every `from_env` constructor has a `from_lookup` twin that takes the variable source
//! as a closure, so configuration can be built in tests without touching the process
//! environment.
//!
//! # Example
//!
//! ```ignore
//! use edusphere_config::{CorsConfig, DatabaseConfig, DemoConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let demo_config = DemoConfig::from_env();
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod demo;
pub mod jwt;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::{ConfigError, DatabaseConfig};
pub use demo::{DemoAccount, DemoConfig};
pub use jwt::JwtConfig;

/// Parses a boolean flag the way shell users write them.
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
