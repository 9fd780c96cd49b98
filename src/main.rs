use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use edusphere::logging::init_tracing;
use edusphere::router::init_router;
use edusphere::state::init_app_state;
use edusphere_db::run_migrations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await?;

    if state.jwt_config.uses_fallback_secret() {
        warn!("JWT_SECRET is not set; tokens are signed with an insecure development secret");
    }
    if state.demo_config.enabled {
        warn!("DEMO_MODE is enabled; built-in demo credentials are accepted at login");
    }

    run_migrations(&state.db)
        .await
        .context("Failed to run database migrations")?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server running on http://localhost:{port}");
    info!("Swagger UI available at http://localhost:{port}/swagger-ui");

    axum::serve(listener, init_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
