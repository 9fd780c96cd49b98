use sqlx::PgPool;

use edusphere_config::{CorsConfig, DatabaseConfig, DemoConfig, JwtConfig};
use edusphere_db::init_db_pool;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub demo_config: DemoConfig,
    pub cors_config: CorsConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_expires_in", &self.jwt_config.expires_in)
            .field("demo_mode", &self.demo_config.enabled)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;

    Ok(AppState {
        db: init_db_pool(&database_config).await?,
        jwt_config: JwtConfig::from_env(),
        demo_config: DemoConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
