// =====================================================================================
// DOCTOR PORTAL HANDLERS
// =====================================================================================

use std::sync::Arc;

use axum::{extract::State, Json};

use shared_models::error::AppError;

use crate::models::{DoctorDashboardView, PortalToggles};
use crate::services::PortalService;

pub async fn get_dashboard(
    State(service): State<Arc<PortalService>>,
) -> Result<Json<DoctorDashboardView>, AppError> {
    Ok(Json(service.dashboard().await))
}

pub async fn toggle_availability(
    State(service): State<Arc<PortalService>>,
) -> Result<Json<PortalToggles>, AppError> {
    Ok(Json(service.toggle_availability().await))
}

pub async fn toggle_face_detection(
    State(service): State<Arc<PortalService>>,
) -> Result<Json<PortalToggles>, AppError> {
    Ok(Json(service.toggle_face_detection().await))
}
