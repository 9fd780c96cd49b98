use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{create_assignment, delete_assignment, get_assignments};
use crate::state::AppState;

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_assignments).post(create_assignment))
        .route("/{id}", delete(delete_assignment))
}
