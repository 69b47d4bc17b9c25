use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/search", get(handlers::search_doctors))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}

pub fn disease_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::list_diseases))
        .route("/select", post(handlers::select_disease))
        .with_state(state)
}
