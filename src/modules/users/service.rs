//! The credential store: `users` plus the `teachers`, `students` and `parents`
//! extension tables.

use anyhow::Context;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use edusphere_core::{AppError, UserRole, hash_password};
use edusphere_models::{Principal, PublicUser, RoleProfile, UserRecord};

/// Joins the user with the extension matching its current role only; extension rows of
/// any other type are ignored.
const PRINCIPAL_QUERY: &str = r#"
    SELECT u.id, u.name, u.email, u.role,
           t.id AS teacher_id, t.subject,
           s.id AS student_id, s.grade,
           p.id AS parent_id, p.phone, p.address
    FROM users u
    LEFT JOIN teachers t ON t.user_id = u.id AND u.role = 'teacher'
    LEFT JOIN students s ON s.user_id = u.id AND u.role = 'student'
    LEFT JOIN parents p ON p.user_id = u.id AND u.role = 'parent'
    WHERE u.id = $1
"#;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<UserRecord>, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password, role, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Loads the principal for `id`. Errors are returned raw so the caller decides what
    /// to reveal.
    pub async fn find_principal_by_id(
        db: &PgPool,
        id: i64,
    ) -> Result<Option<Principal>, sqlx::Error> {
        sqlx::query_as::<_, Principal>(PRINCIPAL_QUERY)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn insert_user(
        conn: &mut PgConnection,
        name: &str,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<UserRecord, AppError> {
        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (name, email, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password, role, created_at, updated_at",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(anyhow::anyhow!("Email already exists"))
            }
            _ => AppError::database(anyhow::Error::new(e).context("Failed to insert user")),
        })
    }

    /// Returns the stored user behind a demo account, creating it on first use.
    ///
    /// The user is matched by email. If its role has drifted from `profile`, the role is
    /// reset and the extension rewritten.
    #[instrument(skip(db, password, profile), fields(role = %profile.role()))]
    pub async fn upsert_demo_user(
        db: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        profile: &RoleProfile,
    ) -> Result<UserRecord, AppError> {
        if let Some(record) = Self::find_by_email(db, email).await? {
            if record.role == profile.role() {
                return Ok(record);
            }
        }

        let password_hash = hash_password(password)?;

        let mut tx = db.begin().await?;
        let record = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (name, email, password, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role, updated_at = NOW()
             RETURNING id, name, email, password, role, created_at, updated_at",
        )
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .bind(profile.role())
        .fetch_one(&mut *tx)
        .await
        .context("Failed to upsert demo user")
        .map_err(AppError::database)?;

        Self::insert_role_extension(&mut tx, record.id, profile).await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Writes the extension row for `profile`, replacing an existing one of the same type.
    /// Roles without an extension table write nothing.
    pub async fn insert_role_extension(
        conn: &mut PgConnection,
        user_id: i64,
        profile: &RoleProfile,
    ) -> Result<(), AppError> {
        let query = match profile {
            RoleProfile::Teacher { subject } => sqlx::query(
                "INSERT INTO teachers (user_id, subject) VALUES ($1, $2)
                 ON CONFLICT (user_id) DO UPDATE SET subject = EXCLUDED.subject",
            )
            .bind(user_id)
            .bind(subject),
            RoleProfile::Student { grade } => sqlx::query(
                "INSERT INTO students (user_id, grade) VALUES ($1, $2)
                 ON CONFLICT (user_id) DO UPDATE SET grade = EXCLUDED.grade",
            )
            .bind(user_id)
            .bind(grade),
            RoleProfile::Parent { phone, address } => sqlx::query(
                "INSERT INTO parents (user_id, phone, address) VALUES ($1, $2, $3)
                 ON CONFLICT (user_id) DO UPDATE
                 SET phone = EXCLUDED.phone, address = EXCLUDED.address",
            )
            .bind(user_id)
            .bind(phone)
            .bind(address),
            RoleProfile::Admin | RoleProfile::HrManager | RoleProfile::BranchManager => {
                return Ok(());
            }
        };

        query
            .execute(&mut *conn)
            .await
            .context("Failed to insert role extension")
            .map_err(AppError::database)?;

        Ok(())
    }

    pub async fn get_users(db: &PgPool) -> Result<Vec<PublicUser>, AppError> {
        let users = sqlx::query_as::<_, PublicUser>(
            "SELECT id, name, email, role, created_at, updated_at FROM users ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch users")
        .map_err(AppError::database)?;

        Ok(users)
    }

    pub async fn get_user(db: &PgPool, id: i64) -> Result<PublicUser, AppError> {
        sqlx::query_as::<_, PublicUser>(
            "SELECT id, name, email, role, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    /// Moves a user to the role in `profile` and writes that role's extension.
    ///
    /// Takes effect on the user's next request; existing tokens stay valid.
    #[instrument(skip(db, profile), fields(role = %profile.role()))]
    pub async fn update_role(
        db: &PgPool,
        id: i64,
        profile: &RoleProfile,
    ) -> Result<PublicUser, AppError> {
        let mut tx = db.begin().await?;

        let user = sqlx::query_as::<_, PublicUser>(
            "UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2
             RETURNING id, name, email, role, created_at, updated_at",
        )
        .bind(profile.role())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to update user role")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Self::insert_role_extension(&mut tx, id, profile).await?;
        tx.commit().await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
