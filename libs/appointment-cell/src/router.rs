use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::{BookingGateway, BookingService, MockBookingGateway};

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    booking_routes_with_gateway(state, Arc::new(MockBookingGateway))
}

pub fn booking_routes_with_gateway(state: Arc<AppConfig>, gateway: Arc<dyn BookingGateway>) -> Router {
    let service = Arc::new(BookingService::new(&state, gateway));

    Router::new()
        .route(
            "/{doctor_id}",
            get(handlers::get_booking_page).post(handlers::book_appointment),
        )
        .with_state(service)
}
