use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn landing_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(handlers::get_landing_page))
        .with_state(state)
}
