use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use edusphere_core::{AppError, ErrorResponse};
use edusphere_models::{Assignment, CreateAssignmentDto};

use super::service::{AssignmentScope, AssignmentService};
use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireStudent, RequireTeacher};
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create an assignment (teachers and admins)
#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = Assignment),
        (status = 400, description = "Missing or unknown teacher", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_assignment(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentDto>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    let assignment = AssignmentService::create(&state.db, auth_user.principal(), dto).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List assignments (students, teachers, and admins)
///
/// Teachers only see their own assignments.
#[utoipa::path(
    get,
    path = "/api/assignments",
    responses(
        (status = 200, description = "Assignments visible to the caller", body = Vec<Assignment>),
        (status = 403, description = "Role not permitted", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_assignments(
    State(state): State<AppState>,
    RequireStudent(auth_user): RequireStudent,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let AuthUser(principal) = auth_user;
    let scope = AssignmentScope::for_principal(&principal)?;
    let assignments = AssignmentService::list(&state.db, scope).await?;
    Ok(Json(assignments))
}

/// Delete an assignment (owning teacher or admin)
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    params(("id" = i64, Path, description = "Assignment id")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 403, description = "Not the owning teacher", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_assignment(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    AssignmentService::delete(&state.db, auth_user.principal(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
