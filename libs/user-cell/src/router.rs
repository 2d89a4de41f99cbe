use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use shared_database::UserStore;

use crate::handlers;
use crate::services::UserService;

pub fn user_routes(store: Arc<dyn UserStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/{user_id}",
            put(handlers::update_user).delete(handlers::delete_user),
        )
        .with_state(Arc::new(UserService::new(store)))
}
