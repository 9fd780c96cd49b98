use std::env;

/// Signing secret used when `JWT_SECRET` is unset. Only fit for local development.
pub const INSECURE_FALLBACK_SECRET: &str = "edusphere-insecure-development-secret";

/// Default token lifetime: 24 hours.
pub const DEFAULT_EXPIRES_IN: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            secret: get("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| INSECURE_FALLBACK_SECRET.to_string()),
            expires_in: get("JWT_EXPIRES_IN")
                .and_then(|s| s.parse().ok())
                .filter(|secs: &i64| *secs > 0)
                .unwrap_or(DEFAULT_EXPIRES_IN),
        }
    }

    /// True when tokens are signed with [`INSECURE_FALLBACK_SECRET`].
    pub fn uses_fallback_secret(&self) -> bool {
        self.secret == INSECURE_FALLBACK_SECRET
    }
}
