// =====================================================================================
// DOCTOR PORTAL ROUTER
// =====================================================================================

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{get_dashboard, toggle_availability, toggle_face_detection};
use crate::services::PortalService;
use shared_config::AppConfig;

pub fn create_doctor_portal_router(_config: Arc<AppConfig>) -> Router {
    let service = Arc::new(PortalService::new());

    Router::new()
        .route("/", get(get_dashboard))
        .route("/availability/toggle", post(toggle_availability))
        .route("/face-detection/toggle", post(toggle_face_detection))
        .with_state(service)
}
