use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use shared_models::error::AppError;

use crate::models::{BookAppointmentRequest, BookingConfirmation, BookingPageView, ConsultationDuration};
use crate::services::booking::BookingService;

#[derive(Debug, Deserialize)]
pub struct BookingPageQuery {
    pub slot: Option<String>,
    pub duration: Option<String>,
}

#[axum::debug_handler]
pub async fn get_booking_page(
    State(service): State<Arc<BookingService>>,
    Path(doctor_id): Path<String>,
    Query(query): Query<BookingPageQuery>,
) -> Result<Json<BookingPageView>, AppError> {
    let duration = match query.duration.as_deref() {
        None | Some("") => ConsultationDuration::default(),
        Some(raw) => raw.parse::<ConsultationDuration>()?,
    };

    let view = service.booking_page(&doctor_id, query.slot, duration, BookingService::today());
    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<BookingService>>,
    Path(doctor_id): Path<String>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let confirmation = service
        .book_appointment(&doctor_id, request, BookingService::today())
        .await?;

    Ok(Json(confirmation))
}
