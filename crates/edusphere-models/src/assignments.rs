//! Teacher-owned assignments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Teachers create assignments for themselves; `teacher_id` is only read for admins.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAssignmentDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub teacher_id: Option<i64>,
}
