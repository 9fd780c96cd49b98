use sqlx::PgPool;
use tracing::{info, instrument, warn};

use edusphere_auth::create_access_token;
use edusphere_config::{DemoConfig, JwtConfig};
use edusphere_core::{AppError, AuthError, UserRole, hash_password, verify_password};
use edusphere_models::{LoginRequest, LoginResponse, PublicUser, RegisterRequest, RoleProfile};

use crate::modules::users::service::UserService;

/// Placeholder extension fields for demo accounts.
fn demo_profile(role: UserRole) -> RoleProfile {
    match role {
        UserRole::Admin => RoleProfile::Admin,
        UserRole::Teacher => RoleProfile::Teacher {
            subject: "General Studies".to_string(),
        },
        UserRole::Student => RoleProfile::Student {
            grade: "Demo".to_string(),
        },
        UserRole::Parent => RoleProfile::Parent {
            phone: "000-0000".to_string(),
            address: "Demo Address".to_string(),
        },
        UserRole::HrManager => RoleProfile::HrManager,
        UserRole::BranchManager => RoleProfile::BranchManager,
    }
}

pub struct AuthService;

impl AuthService {
    /// Exchanges credentials for a session token.
    ///
    /// With demo mode on, a password matching a demo account signs in as that account
    /// whatever the submitted email. The account's stored user is created on first use. Otherwise the email must name a stored user whose
    /// bcrypt hash matches the password.
    #[instrument(skip(db, dto, jwt_config, demo_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
        demo_config: &DemoConfig,
    ) -> Result<LoginResponse, AppError> {
        if let Some(account) = demo_config.find_by_password(&dto.password) {
            let record = UserService::upsert_demo_user(
                db,
                &account.name,
                &account.email,
                &account.password,
                &demo_profile(account.role),
            )
            .await?;

            warn!(
                user_id = record.id,
                role = %record.role,
                "Login satisfied by demo credentials"
            );

            let token = create_access_token(record.id, record.role, jwt_config)?;
            return Ok(LoginResponse {
                token,
                user: record.into(),
            });
        }

        let record = UserService::find_by_email(db, &dto.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A stored value that is not a bcrypt hash can never match.
        let matches = verify_password(&dto.password, &record.password).unwrap_or_else(|e| {
            warn!(user_id = record.id, error = %e.error, "Stored password hash is unreadable");
            false
        });
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = create_access_token(record.id, record.role, jwt_config)?;
        info!(user_id = record.id, role = %record.role, "User logged in");

        Ok(LoginResponse {
            token,
            user: record.into(),
        })
    }

    /// Creates a user and its role extension atomically.
    #[instrument(skip(db, dto), fields(email = %dto.email, role = %dto.profile.role()))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<PublicUser, AppError> {
        if UserService::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::conflict(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let mut tx = db.begin().await?;
        let user = UserService::insert_user(
            &mut tx,
            &dto.name,
            &dto.email,
            &hashed_password,
            dto.profile.role(),
        )
        .await?;
        UserService::insert_role_extension(&mut tx, user.id, &dto.profile).await?;
        tx.commit().await?;

        info!(user_id = user.id, "User registered");
        Ok(user.into())
    }
}
