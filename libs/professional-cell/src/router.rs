use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use shared_database::ProfessionalStore;

use crate::handlers;
use crate::services::ProfessionalService;

pub fn professional_routes(store: Arc<dyn ProfessionalStore>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_professionals).post(handlers::create_professional),
        )
        .route(
            "/{professional_id}",
            put(handlers::update_professional).delete(handlers::delete_professional),
        )
        .with_state(Arc::new(ProfessionalService::new(store)))
}
