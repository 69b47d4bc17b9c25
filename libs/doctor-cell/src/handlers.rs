use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorCard, PatientDashboardView, SortKey};
use crate::services::{
    dashboard::PatientDashboard,
    doctor::DoctorService,
    selection::DiseaseSelection,
};

#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub disease: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectDiseaseRequest {
    #[serde(default)]
    pub selected: String,
    pub clicked: String,
}

#[axum::debug_handler]
pub async fn list_diseases(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);
    let tiles = DiseaseSelection::default().tiles(doctor_service.diseases());

    Ok(Json(json!({
        "diseases": tiles,
        "total": tiles.len()
    })))
}

#[axum::debug_handler]
pub async fn select_disease(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<SelectDiseaseRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);
    let diseases = doctor_service.diseases();

    let mut selection = DiseaseSelection::new(request.selected);
    selection.toggle(&request.clicked);

    Ok(Json(json!({
        "selected": selection,
        "banner": selection.banner(diseases),
        "tiles": selection.tiles(diseases)
    })))
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<PatientDashboardView>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let sort_key = match query.sort.as_deref() {
        None | Some("") => SortKey::default(),
        Some(raw) => raw.parse::<SortKey>()?,
    };

    let dashboard = PatientDashboard::new(
        DiseaseSelection::new(query.disease.unwrap_or_default()),
        query.q.unwrap_or_default(),
        sort_key,
    );

    Ok(Json(dashboard.view(doctor_service.catalog())))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<DoctorCard>, AppError> {
    let doctor_service = DoctorService::new(&state);
    let card = doctor_service.get_doctor_card(&doctor_id)?;
    Ok(Json(card))
}
