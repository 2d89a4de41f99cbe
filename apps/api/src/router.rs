use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use appointment_cell::router::appointment_routes;
use external_data_cell::router::external_data_routes;
use professional_cell::router::professional_routes;
use shared_config::AppConfig;
use shared_database::Stores;
use user_cell::router::user_routes;

pub fn create_router(stores: Stores, config: Arc<AppConfig>, client: reqwest::Client) -> Router {
    let api = Router::new()
        .route("/status", get(status))
        .nest("/users", user_routes(stores.users.clone()))
        .nest(
            "/professionals",
            professional_routes(stores.professionals.clone()),
        )
        .nest("/appointments", appointment_routes(stores))
        .merge(external_data_routes(config, client));

    Router::new().nest("/api", api)
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
