use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000,http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins() {
        let config = CorsConfig::from_lookup(|_| None);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_origins_are_trimmed_and_filtered() {
        let config =
            CorsConfig::from_lookup(|_| Some(" https://a.school , ,https://b.school".to_string()));
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.school", "https://b.school"]
        );
    }
}
