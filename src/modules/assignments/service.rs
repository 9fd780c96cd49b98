use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use edusphere_core::{AppError, UserRole};
use edusphere_models::{Assignment, CreateAssignmentDto, Principal};

/// Which assignments a principal may see or change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentScope {
    All,
    OwnedBy(i64),
}

impl AssignmentScope {
    /// Teachers are limited to their own assignments; a teacher without a teacher
    /// profile has no scope at all.
    pub fn for_principal(principal: &Principal) -> Result<Self, AppError> {
        match principal.role {
            UserRole::Teacher => principal
                .teacher_id
                .map(AssignmentScope::OwnedBy)
                .ok_or_else(|| AppError::forbidden("Teacher profile not found")),
            _ => Ok(AssignmentScope::All),
        }
    }

    pub fn permits(&self, assignment: &Assignment) -> bool {
        match self {
            AssignmentScope::All => true,
            AssignmentScope::OwnedBy(teacher_id) => assignment.teacher_id == *teacher_id,
        }
    }
}

pub struct AssignmentService;

impl AssignmentService {
    /// Creates an assignment. Teachers always create for themselves; admins name the
    /// owning teacher in `dto.teacher_id`.
    #[instrument(skip(db, principal, dto), fields(user_id = principal.id))]
    pub async fn create(
        db: &PgPool,
        principal: &Principal,
        dto: CreateAssignmentDto,
    ) -> Result<Assignment, AppError> {
        let teacher_id = match AssignmentScope::for_principal(principal)? {
            AssignmentScope::OwnedBy(teacher_id) => teacher_id,
            AssignmentScope::All => dto.teacher_id.ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("teacher_id is required"))
            })?,
        };

        sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (teacher_id, title, description, due_date)
             VALUES ($1, $2, $3, $4)
             RETURNING id, teacher_id, title, description, due_date, created_at",
        )
        .bind(teacher_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.due_date)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::bad_request(anyhow::anyhow!("Teacher not found"))
            }
            _ => AppError::database(anyhow::Error::new(e).context("Failed to create assignment")),
        })
    }

    pub async fn list(db: &PgPool, scope: AssignmentScope) -> Result<Vec<Assignment>, AppError> {
        let query = match scope {
            AssignmentScope::All => sqlx::query_as::<_, Assignment>(
                "SELECT id, teacher_id, title, description, due_date, created_at
                 FROM assignments ORDER BY id",
            ),
            AssignmentScope::OwnedBy(teacher_id) => sqlx::query_as::<_, Assignment>(
                "SELECT id, teacher_id, title, description, due_date, created_at
                 FROM assignments WHERE teacher_id = $1 ORDER BY id",
            )
            .bind(teacher_id),
        };

        let assignments = query
            .fetch_all(db)
            .await
            .context("Failed to fetch assignments")
            .map_err(AppError::database)?;

        Ok(assignments)
    }

    #[instrument(skip(db, principal), fields(user_id = principal.id))]
    pub async fn delete(db: &PgPool, principal: &Principal, id: i64) -> Result<(), AppError> {
        let scope = AssignmentScope::for_principal(principal)?;

        let assignment = sqlx::query_as::<_, Assignment>(
            "SELECT id, teacher_id, title, description, due_date, created_at
             FROM assignments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch assignment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Assignment not found")))?;

        if !scope.permits(&assignment) {
            return Err(AppError::forbidden("Assignment belongs to another teacher"));
        }

        sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete assignment")
            .map_err(AppError::database)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn principal(role: UserRole, teacher_id: Option<i64>) -> Principal {
        Principal {
            id: 9,
            name: "Test".to_string(),
            email: "test@school.com".to_string(),
            role,
            teacher_id,
            subject: teacher_id.map(|_| "History".to_string()),
            student_id: None,
            grade: None,
            parent_id: None,
            phone: None,
            address: None,
        }
    }

    fn assignment(teacher_id: i64) -> Assignment {
        Assignment {
            id: 1,
            teacher_id,
            title: "Essay".to_string(),
            description: None,
            due_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_teacher_scope_is_own_assignments() {
        let scope = AssignmentScope::for_principal(&principal(UserRole::Teacher, Some(4))).unwrap();
        assert_eq!(scope, AssignmentScope::OwnedBy(4));
        assert!(scope.permits(&assignment(4)));
        assert!(!scope.permits(&assignment(5)));
    }

    #[test]
    fn test_teacher_without_profile_has_no_scope() {
        let err = AssignmentScope::for_principal(&principal(UserRole::Teacher, None)).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_admin_and_student_see_everything() {
        for role in [UserRole::Admin, UserRole::Student] {
            let scope = AssignmentScope::for_principal(&principal(role, None)).unwrap();
            assert_eq!(scope, AssignmentScope::All);
            assert!(scope.permits(&assignment(42)));
        }
    }
}
