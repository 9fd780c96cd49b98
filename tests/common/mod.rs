#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use edusphere::router::init_router;
use edusphere::state::AppState;
use edusphere_auth::{create_access_token, create_token_at};
use edusphere_config::{CorsConfig, DemoConfig, JwtConfig};
use edusphere_core::{UserRole, hash_password};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    /// Id of the teachers/students/parents row, if the role has one.
    pub extension_id: Option<i64>,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expires_in: 3600,
    }
}

pub fn test_state(pool: PgPool, demo_config: DemoConfig) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        demo_config,
        cors_config: CorsConfig::from_lookup(|_| None),
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool, DemoConfig::disabled()))
}

pub fn setup_demo_app(pool: PgPool) -> axum::Router {
    init_router(test_state(
        pool,
        DemoConfig::with_accounts(DemoConfig::default_accounts()),
    ))
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts a user with the given role plus a matching extension row.
pub async fn create_test_user(pool: &PgPool, role: UserRole) -> TestUser {
    let email = generate_unique_email();
    let password = "testpass123".to_string();
    let hashed = hash_password(&password).unwrap();

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind("Test User")
    .bind(&email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    let extension_id = match role {
        UserRole::Teacher => Some(
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO teachers (user_id, subject) VALUES ($1, $2) RETURNING id",
            )
            .bind(id)
            .bind("Mathematics")
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        UserRole::Student => Some(
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO students (user_id, grade) VALUES ($1, $2) RETURNING id",
            )
            .bind(id)
            .bind("Grade 7")
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        UserRole::Parent => Some(
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO parents (user_id, phone, address) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(id)
            .bind("+15550100")
            .bind("1 School Lane")
            .fetch_one(pool)
            .await
            .unwrap(),
        ),
        UserRole::Admin | UserRole::HrManager | UserRole::BranchManager => None,
    };

    TestUser {
        id,
        email,
        password,
        role,
        extension_id,
    }
}

pub fn token_for(user: &TestUser) -> String {
    create_access_token(user.id, user.role, &test_jwt_config()).unwrap()
}

pub fn expired_token_for(user: &TestUser) -> String {
    token_expired_seconds_ago(user, 3600)
}

/// Token whose `exp` passed `seconds` ago.
pub fn token_expired_seconds_ago(user: &TestUser, seconds: i64) -> String {
    let config = test_jwt_config();
    let issued_at = chrono::Utc::now().timestamp() - config.expires_in - seconds;
    create_token_at(user.id, user.role, issued_at, &config).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&body).unwrap()
}
