// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use shared_database::Stores;

use crate::handlers;
use crate::services::{AppointmentWriter, ReferenceValidator};

pub fn appointment_routes(stores: Stores) -> Router {
    let references = ReferenceValidator::new(stores.users, stores.professionals);
    let writer = AppointmentWriter::new(stores.appointments, references);

    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/{appointment_id}",
            put(handlers::update_appointment).delete(handlers::delete_appointment),
        )
        .with_state(Arc::new(writer))
}
