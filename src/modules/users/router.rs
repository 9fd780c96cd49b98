use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::users::controller::{delete_user, get_user, get_users, update_user_role};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/{id}", get(get_user).delete(delete_user))
        .route("/{id}/role", put(update_user_role))
}
