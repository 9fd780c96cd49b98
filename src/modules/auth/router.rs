use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{get_me, login_user, register_user};
use crate::middleware::auth::authenticate;
use crate::state::AppState;

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
        .merge(
            Router::new()
                .route("/me", get(get_me))
                .route_layer(middleware::from_fn_with_state(state, authenticate)),
        )
}
